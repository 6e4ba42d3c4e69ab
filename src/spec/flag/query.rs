use std::fmt;

/// Use this to search a flag set based on command line text
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query {
    Name(String),
    Short(char),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flag_str = match self {
            Query::Name(s) => format!("--{}", s),
            Query::Short(c) => format!("-{}", c),
        };
        write!(f, "{}", flag_str)
    }
}
