use crate::core::substitution::Substitution;
use crate::core::term::Term;
use std::fmt::Formatter;

/// A named, optionally negated relation over an ordered list of terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    name: String,
    negated: bool,
    args: Vec<Term>,
}

impl Predicate {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = impl Into<Term>>) -> Self {
        Predicate {
            name: name.into(),
            negated: false,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Like `new`, but the relation is negated (`~Name(...)`).
    pub fn negated(name: impl Into<String>, args: impl IntoIterator<Item = impl Into<Term>>) -> Self {
        Predicate {
            negated: true,
            ..Predicate::new(name, args)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` if `other` may unify with this predicate.
    ///
    /// Only negation, name and arity are compared; arguments are left to
    /// the unifier.
    pub fn matches(&self, other: &Predicate) -> bool {
        self.negated == other.negated && self.name == other.name && self.arity() == other.arity()
    }

    /// Returns `true` if no argument is a variable.
    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_constant)
    }

    /// Rename every variable argument by appending `id`.
    pub fn standardize(&self, id: usize) -> Self {
        Predicate {
            name: self.name.clone(),
            negated: self.negated,
            args: self.args.iter().map(|t| t.standardize(id)).collect(),
        }
    }

    /// Replace each argument bound in `theta` by its bound term.
    ///
    /// Bindings are looked up once, not followed transitively. Callers must
    /// not pass a failed substitution.
    pub fn substitute(&self, theta: &Substitution) -> Self {
        debug_assert!(!theta.is_failed());
        Predicate {
            name: self.name.clone(),
            negated: self.negated,
            args: self
                .args
                .iter()
                .map(|t| theta.get(t).unwrap_or(t).clone())
                .collect(),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{}(", self.name)?;
        let mut iter = self.args.iter();
        if let Some(arg) = iter.next() {
            write!(f, "{}", arg)?;
        }
        for arg in iter {
            write!(f, ",{}", arg)?;
        }
        write!(f, ")")
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
