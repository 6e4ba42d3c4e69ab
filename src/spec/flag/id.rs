/// Use this to uniquely identify a flag within a set: a long name plus an
/// optional one-letter shorthand.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Id {
    name: String,
    short: Option<char>,
}

impl Id {
    pub fn new(name: &str, short: Option<char>) -> Id {
        Id { name: name.to_owned(), short }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }
}
