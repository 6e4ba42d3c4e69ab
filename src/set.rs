use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use lexical_sort::{natural_lexical_cmp, StringSort};
use log::{debug, trace};

use crate::spec::flag;
use crate::spec::flag::error::{FlagMissingArgError, FlagTypeError, UnknownFlagError};
use crate::spec::flag::{Flag, Query};
use crate::value::Value;

/// Registry of flag registrations. Parsing assigns each recognized flag
/// through its bound Value; tokens that are not flags collect as positional
/// arguments.
pub struct FlagSet {
    name: String,
    flags: HashMap<String, Flag>,
    args: Vec<String>,
}

impl FlagSet {
    pub fn new(name: &str) -> FlagSet {
        FlagSet {
            name: name.to_owned(),
            flags: HashMap::new(),
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Register a typed value under a long name and optional shorthand.
    /// Returns the registration record so the caller can declare a
    /// no-argument default on it.
    ///
    /// # Panics
    ///
    /// Redefining a name or shorthand already registered in this set is a
    /// programming error and panics.
    pub fn var(
        &mut self,
        value: Box<dyn Value + Send>,
        name: &str,
        short: Option<char>,
        usage: &str,
    ) -> &mut Flag {
        if self.flags.contains_key(name) {
            panic!("flag '--{}' redefined in flag set '{}'", name, self.name);
        }
        if let Some(c) = short {
            if self.query(&Query::Short(c)).is_some() {
                panic!("shorthand '-{}' redefined in flag set '{}'", c, self.name);
            }
        }

        trace!("registering flag '--{}' in flag set '{}'", name, self.name);
        self.flags
            .entry(name.to_owned())
            .or_insert_with(|| Flag::new(value, name, short, usage))
    }

    /// Look up a registration by long name.
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// Find a flag matching a query parsed from command line text.
    fn query(&self, needle: &Query) -> Option<&Flag> {
        for entry in self.flags.values() {
            if match needle {
                Query::Name(ref s) => *s == entry.id().name(),
                Query::Short(ref c) => entry.id().short() == Some(*c),
            } {
                return Some(entry);
            }
        }
        None
    }

    fn query_mut(&mut self, needle: &Query) -> Option<&mut Flag> {
        for entry in self.flags.values_mut() {
            if match needle {
                Query::Name(ref s) => *s == entry.id().name(),
                Query::Short(ref c) => entry.id().short() == Some(*c),
            } {
                return Some(entry);
            }
        }
        None
    }

    /// Positional arguments left over from parsing.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Scan an argument list, assigning every recognized flag through its
    /// registered Value. A flag with a no-argument default never consumes
    /// the following token; it is fed its declared sentinel instead unless
    /// an inline `=value` was given. Everything after a literal `--` is
    /// positional.
    pub fn parse<I>(&mut self, args: I) -> Result<(), Box<dyn Error>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = args.into_iter().peekable();

        while let Some(token) = tokens.next() {
            let token = token.as_ref();

            if token == "--" {
                self.args.extend(tokens.map(|t| t.as_ref().to_owned()));
                break;
            }

            let (needle, inline) = match flag::extract(token) {
                Some(parts) => parts,
                None => {
                    self.args.push(token.to_owned());
                    continue;
                }
            };

            let flag_spec = match self.query_mut(&needle) {
                Some(entry) => entry,
                None => {
                    return Err(Box::new(UnknownFlagError(needle)));
                }
            };

            // decide whether this flag consumes an argument token
            let value_token = if let Some(inline) = inline {
                inline
            } else if let Some(sentinel) = flag_spec.no_arg_default() {
                sentinel.to_owned()
            } else {
                let next = tokens.peek();
                if next.is_none() || flag::is_flag(next.unwrap().as_ref()) {
                    return Err(Box::new(FlagMissingArgError(needle)));
                }
                tokens.next().unwrap().as_ref().to_owned()
            };

            debug!("assigning flag '{}' from token '{}'", needle, value_token);
            flag_spec.set(&value_token)?;
            flag_spec.mark_changed();
        }

        Ok(())
    }

    /// Type-checked retrieval: verify the registration's type tag, then
    /// decode its rendered text form back into a native value.
    pub fn get_typed<T, F>(&self, name: &str, expected_tag: &str, decode: F) -> Result<T, Box<dyn Error>>
    where
        F: Fn(&str) -> Result<T, Box<dyn Error>>,
    {
        let flag_spec = match self.lookup(name) {
            Some(entry) => entry,
            None => {
                return Err(Box::new(UnknownFlagError(Query::Name(name.to_owned()))));
            }
        };

        if flag_spec.type_tag() != expected_tag {
            return Err(Box::new(FlagTypeError {
                name: name.to_owned(),
                expected: expected_tag.to_owned(),
                actual: flag_spec.type_tag().to_owned(),
            }));
        }

        decode(&flag_spec.render())
    }

    /// Aligned usage listing of every registered flag, lexically sorted by
    /// long name.
    pub fn flag_usages(&self) -> String {
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.string_sort_unstable(natural_lexical_cmp);

        let mut id_width = 0;
        for entry in flags.iter() {
            let width = "-x, --".len() + entry.id().name().len();
            if width > id_width {
                id_width = width;
            }
        }

        let mut usages = String::new();
        for entry in flags.iter() {
            let mut line = match entry.id().short() {
                Some(c) => format!("  -{}, --{}", c, entry.id().name()),
                None => format!("      --{}", entry.id().name()),
            };

            for _ in 0..(id_width + 2 - (line.len() - 2)) {
                line += " ";
            }
            line += entry.usage();
            line += "\n";
            usages += &line;
        }

        usages
    }
}

lazy_static! {
    static ref COMMAND_LINE: Mutex<FlagSet> = Mutex::new(FlagSet::new("command line"));
}

/// Lock the process-wide default flag set. The set is initialized on first
/// access; the guard serializes registration, parsing, and retrieval.
pub fn command_line() -> MutexGuard<'static, FlagSet> {
    COMMAND_LINE.lock().unwrap()
}

/// Parse the process argument list into the shared command line set.
pub fn parse_command_line() -> Result<(), Box<dyn Error>> {
    command_line().parse(env::args().skip(1))
}
