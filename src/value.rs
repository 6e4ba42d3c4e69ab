use std::error::Error;
use std::num::ParseIntError;

pub mod count;

/// The typed storage behind a flag registration. A Value knows how to parse
/// a textual token into itself, print its current state back out, and name
/// its own type for type-checked retrieval.
///
/// Implementations must not wrap or translate parse failures; the original
/// error is returned so callers can tell malformed input apart from other
/// failures.
pub trait Value {
    /// Parse a token and mutate the value in place.
    fn set(&mut self, token: &str) -> Result<(), Box<dyn Error>>;

    /// Current state as canonical text.
    fn render(&self) -> String;

    /// Stable identifier consumed by the type-checked retrieval path.
    fn type_tag(&self) -> &'static str;
}

/// Parse a signed integer literal in any conventional base: decimal,
/// `0x`/`0X` hex, `0o`/`0O` or legacy leading-zero octal, and `0b`/`0B`
/// binary, with an optional leading sign. Errors come straight from
/// `i64::from_str_radix`.
pub fn parse_int_literal(text: &str) -> Result<i64, ParseIntError> {
    let (sign, body) = if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        ("", rest)
    } else {
        ("", text)
    };

    let (radix, digits) = if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (8, d)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (2, d)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    i64::from_str_radix(&format!("{}{}", sign, digits), radix)
}
