use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use super::Query;

/// No registration matches the queried name or shorthand.
#[derive(Debug)]
pub struct UnknownFlagError(pub Query);

impl Display for UnknownFlagError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "unrecognized flag '{}'", self.0)
    }
}

impl Error for UnknownFlagError {}

/// Flag requires an argument but none could be consumed.
#[derive(Debug)]
pub struct FlagMissingArgError(pub Query);

impl Display for FlagMissingArgError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "flag '{}' is missing a required argument", self.0)
    }
}

impl Error for FlagMissingArgError {}

/// Typed retrieval asked for a type tag the registration does not carry.
#[derive(Debug)]
pub struct FlagTypeError {
    pub name: String,
    pub expected: String,
    pub actual: String,
}

impl Display for FlagTypeError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "trying to access flag '--{}' as type {} but it is defined as type {}",
            self.name, self.expected, self.actual
        )
    }
}

impl Error for FlagTypeError {}
