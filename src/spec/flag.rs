use std::error::Error;
use std::fmt;

use crate::value::Value;
pub use id::*;
pub use query::*;

pub mod error;
mod id;
mod query;

/// Registration record for a command line flag. Binds a name/shorthand pair
/// to a typed Value instance, a usage string, and an optional no-argument
/// default token.
pub struct Flag {
    id: Id,
    usage: String,
    value: Box<dyn Value + Send>,
    no_arg_default: Option<String>,
    changed: bool,
}

impl Flag {
    pub fn new(value: Box<dyn Value + Send>, name: &str, short: Option<char>, usage: &str) -> Flag {
        let id = Id::new(name, short);
        Flag {
            id,
            usage: usage.to_owned(),
            value,
            no_arg_default: None,
            changed: false,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Declare the token the parser substitutes when this flag appears with
    /// no consumable argument. The token is arbitrary text meaningful only
    /// to the bound Value; the parser never interprets it.
    pub fn set_no_arg_default(&mut self, token: &str) -> &mut Flag {
        self.no_arg_default = Some(token.to_owned());
        self
    }

    pub fn no_arg_default(&self) -> Option<&str> {
        self.no_arg_default.as_deref()
    }

    /// true once parsing has assigned this flag at least once
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub(crate) fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Feed a token to the bound Value.
    pub fn set(&mut self, token: &str) -> Result<(), Box<dyn Error>> {
        self.value.set(token)
    }

    /// Current state of the bound Value as canonical text.
    pub fn render(&self) -> String {
        self.value.render()
    }

    pub fn type_tag(&self) -> &'static str {
        self.value.type_tag()
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)?;
        self.usage.fmt(f)?;
        self.no_arg_default.fmt(f)?;
        Ok(())
    }
}

impl AsRef<str> for Flag {
    fn as_ref(&self) -> &str {
        self.id().name()
    }
}

/// check if a string is a long flag
pub fn is_long(flag_text: &str) -> bool {
    flag_text.starts_with("--") && flag_text.len() > 3
}

/// check if a string is a short flag
pub fn is_short(flag_text: &str) -> bool {
    flag_text.starts_with('-') && flag_text.len() > 1
}

/// check if a string is a flag
pub fn is_flag(flag_text: &str) -> bool {
    is_long(flag_text) || is_short(flag_text)
}

/// Split command line text into a flag query plus an optional inline
/// `=value`. The recognized forms are `--name`, `--name=value`, `-c`, and
/// `-c=value`; clustered shorthands are not supported, and anything else
/// returns None.
pub fn extract(flag_text: &str) -> Option<(Query, Option<String>)> {
    if is_long(flag_text) {
        let body = flag_text.strip_prefix("--")?;
        match body.split_once('=') {
            Some((name, value)) => Some((Query::Name(name.to_owned()), Some(value.to_owned()))),
            None => Some((Query::Name(body.to_owned()), None)),
        }
    } else if is_short(flag_text) {
        let mut chars = flag_text.chars();
        chars.next();
        let short = chars.next()?;
        let rest: String = chars.collect();
        if rest.is_empty() {
            Some((Query::Short(short), None))
        } else {
            rest.strip_prefix('=')
                .map(|value| (Query::Short(short), Some(value.to_owned())))
        }
    } else {
        None
    }
}
