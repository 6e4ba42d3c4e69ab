use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::set::{self, FlagSet};
use crate::value::{self, Value};

/// Reserved token fed to a count flag when it appears bare on the command
/// line. Shared by agreement between the registration's no-argument default
/// and `CountValue::set`; the parser itself never interprets it.
pub const NO_ARG_INCREMENT: &str = "+1";

/// Shared storage cell for a count flag's state. The registration site
/// either supplies one or receives a clone of a freshly allocated cell; the
/// bound CountValue always writes through the same cell.
#[derive(Clone, Debug, Default)]
pub struct Counter(Arc<Mutex<i64>>);

impl Counter {
    pub fn new(value: i64) -> Counter {
        Counter(Arc::new(Mutex::new(value)))
    }

    pub fn get(&self) -> i64 {
        *self.0.lock().unwrap()
    }

    pub fn set(&self, value: i64) {
        *self.0.lock().unwrap() = value;
    }

    fn add(&self, delta: i64) {
        *self.0.lock().unwrap() += delta;
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<i64> for Counter {
    fn from(value: i64) -> Self {
        Counter::new(value)
    }
}

/// Count flag value. The bare sentinel increments the current state by one;
/// any other token is parsed as an integer literal and overwrites the state.
/// A failed parse leaves the state unchanged and returns the parse error
/// untouched.
pub struct CountValue {
    count: Counter,
}

impl CountValue {
    pub fn new(initial: i64, count: &Counter) -> CountValue {
        count.set(initial);
        CountValue { count: count.clone() }
    }
}

impl Value for CountValue {
    fn set(&mut self, token: &str) -> Result<(), Box<dyn Error>> {
        // the sentinel means no explicit value was passed, so increment
        if token == NO_ARG_INCREMENT {
            self.count.add(1);
            return Ok(());
        }

        let parsed = value::parse_int_literal(token)?;
        self.count.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.count.get().to_string()
    }

    fn type_tag(&self) -> &'static str {
        "count"
    }
}

impl FlagSet {
    /// Define a count flag backed by caller-supplied storage. The flag adds
    /// one to its value every time it appears bare on the command line.
    pub fn count_var(&mut self, count: &Counter, name: &str, usage: &str) {
        self.count_var_impl(count, name, None, usage);
    }

    /// Like count_var, with a one-letter shorthand.
    pub fn count_var_p(&mut self, count: &Counter, name: &str, short: char, usage: &str) {
        self.count_var_impl(count, name, Some(short), usage);
    }

    /// Define a count flag with library-allocated storage. Read the value
    /// later through the returned Counter or through get_count.
    pub fn count(&mut self, name: &str, usage: &str) -> Counter {
        let count = Counter::default();
        self.count_var_impl(&count, name, None, usage);
        count
    }

    /// Like count, with a one-letter shorthand.
    pub fn count_p(&mut self, name: &str, short: char, usage: &str) -> Counter {
        let count = Counter::default();
        self.count_var_impl(&count, name, Some(short), usage);
        count
    }

    fn count_var_impl(&mut self, count: &Counter, name: &str, short: Option<char>, usage: &str) {
        let value = CountValue::new(0, count);
        self.var(Box::new(value), name, short, usage)
            .set_no_arg_default(NO_ARG_INCREMENT);
    }

    /// Current value of the named count flag, re-derived from its rendered
    /// text form.
    pub fn get_count(&self, name: &str) -> Result<i64, Box<dyn Error>> {
        self.get_typed(name, "count", |text| match text.parse::<i64>() {
            Ok(parsed) => Ok(parsed),
            Err(err) => Err(err.into()),
        })
    }
}

/// Define a count flag on the shared command line set, returning its
/// storage cell.
pub fn count(name: &str, usage: &str) -> Counter {
    set::command_line().count(name, usage)
}

/// Like count, with a one-letter shorthand.
pub fn count_p(name: &str, short: char, usage: &str) -> Counter {
    set::command_line().count_p(name, short, usage)
}

/// Define a count flag on the shared command line set, backed by
/// caller-supplied storage.
pub fn count_var(count: &Counter, name: &str, usage: &str) {
    set::command_line().count_var(count, name, usage);
}

/// Like count_var, with a one-letter shorthand.
pub fn count_var_p(count: &Counter, name: &str, short: char, usage: &str) {
    set::command_line().count_var_p(count, name, short, usage);
}

/// Current value of a count flag on the shared command line set.
pub fn get_count(name: &str) -> Result<i64, Box<dyn Error>> {
    set::command_line().get_count(name)
}
