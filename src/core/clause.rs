use crate::core::predicate::Predicate;
use std::fmt::Formatter;

/// A Horn clause: either a fact or `antecedents => consequent`.
///
/// Facts are clauses without antecedents. Clauses are plain values;
/// renaming produces a fresh copy and never touches the original.
#[derive(Clone, PartialEq, Eq)]
pub struct Clause {
    antecedents: Vec<Predicate>,
    consequent: Predicate,
}

impl Clause {
    pub fn fact(p: Predicate) -> Self {
        Clause {
            antecedents: vec![],
            consequent: p,
        }
    }

    pub fn rule(antecedents: Vec<Predicate>, consequent: Predicate) -> Self {
        Clause {
            antecedents,
            consequent,
        }
    }

    pub fn is_fact(&self) -> bool {
        self.antecedents.is_empty()
    }

    pub fn antecedents(&self) -> &[Predicate] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Predicate {
        &self.consequent
    }

    /// Rename all variables in the clause by appending `id`.
    pub fn standardize(&self, id: usize) -> Self {
        Clause {
            antecedents: self
                .antecedents
                .iter()
                .map(|p| p.standardize(id))
                .collect(),
            consequent: self.consequent.standardize(id),
        }
    }
}

impl From<Predicate> for Clause {
    fn from(p: Predicate) -> Self {
        Clause::fact(p)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut iter = self.antecedents.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for p in iter {
                write!(f, " ^ {}", p)?;
            }
            write!(f, " => ")?;
        }
        write!(f, "{}", self.consequent)
    }
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
