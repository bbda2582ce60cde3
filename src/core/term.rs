use std::fmt::Formatter;

/// Named predicate argument.
///
/// Whether a term is a variable or a constant is decided by its name
/// alone: a name made up entirely of lowercase ASCII letters and decimal
/// digits is a variable, anything else is a constant. This means that
/// lowercase constants such as `socrates` read as variables.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(String);

impl Term {
    /// Create a term with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Term(name.into())
    }

    /// Return the term's name.
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_variable(&self) -> bool {
        is_variable_name(&self.0)
    }

    pub fn is_constant(&self) -> bool {
        !self.is_variable()
    }

    /// Rename a variable by appending `id` to its name.
    ///
    /// Constants are returned unchanged.
    pub fn standardize(&self, id: usize) -> Self {
        if self.is_variable() {
            Term(format!("{}{}", self.0, id))
        } else {
            self.clone()
        }
    }
}

/// Classify a name: lowercase ASCII letters and digits only.
pub fn is_variable_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::new(name)
    }
}

impl From<String> for Term {
    fn from(name: String) -> Self {
        Term(name)
    }
}

impl PartialEq<str> for Term {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
