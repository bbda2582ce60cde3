//! Substitutions map variables to terms.
//!
//! A substitution is also the result of unification. Instead of an error
//! a failed unification produces a substitution marked as failed, which
//! stays failed through every further unification step.

use crate::core::term::Term;
use std::collections::HashMap;
use std::fmt::Formatter;

/// Mapping of variables to terms.
#[derive(Clone)]
pub struct Substitution {
    subs: HashMap<Term, Term>,
    failed: bool,
}

impl Default for Substitution {
    fn default() -> Self {
        Self::empty()
    }
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            subs: HashMap::new(),
            failed: false,
        }
    }

    /// A substitution that records a failed unification.
    pub fn failure() -> Self {
        Substitution {
            subs: HashMap::new(),
            failed: true,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Get number of substituted variables
    pub fn n_subs(&self) -> usize {
        self.subs.len()
    }

    /// Look up the term bound to `var`.
    ///
    /// Failed substitutions never bind anything.
    pub fn get(&self, var: &Term) -> Option<&Term> {
        if self.failed {
            None
        } else {
            self.subs.get(var)
        }
    }

    /// Iterate over all bindings in unspecified order.
    pub fn bindings(&self) -> impl Iterator<Item = (&Term, &Term)> {
        let subs = if self.failed { None } else { Some(&self.subs) };
        subs.into_iter().flat_map(|subs| subs.iter())
    }

    /// Follow bindings from `t` until reaching an unbound term.
    ///
    /// There is no occurs check, so a cyclic chain of bindings is cut
    /// once it revisits a term.
    pub fn walk<'a>(&'a self, mut t: &'a Term) -> &'a Term {
        let mut seen = Vec::new();
        while let Some(next) = self.get(t) {
            if seen.contains(&next) {
                break;
            }
            seen.push(t);
            t = next;
        }
        t
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// The result fails if `var` is not a variable or if it would be
    /// bound to itself.
    pub fn extend(mut self, var: Term, term: Term) -> Self {
        if self.failed || var == term || !var.is_variable() {
            return Self::failure();
        }
        self.subs.insert(var, term);
        self
    }

    /// Attempt to unify two argument lists pairwise under this substitution.
    ///
    /// Lists of different length never unify.
    pub fn unify_all(self, xs: &[Term], ys: &[Term]) -> Self {
        if self.failed || xs.len() != ys.len() {
            return Self::failure();
        }
        xs.iter()
            .zip(ys)
            .fold(self, |theta, (x, y)| theta.unify(x, y))
    }

    /// Attempt to unify terms `x` and `y` under this substitution.
    pub fn unify(self, x: &Term, y: &Term) -> Self {
        if self.failed {
            return self;
        }
        if x == y {
            return self;
        }
        if x.is_variable() {
            return self.unify_var(x, y);
        }
        if y.is_variable() {
            return self.unify_var(y, x);
        }
        Self::failure()
    }

    fn unify_var(self, var: &Term, term: &Term) -> Self {
        if let Some(bound) = self.subs.get(var).cloned() {
            return self.unify(&bound, term);
        }
        if let Some(bound) = self.subs.get(term).cloned() {
            return self.unify(var, &bound);
        }
        self.extend(var.clone(), term.clone())
    }

    fn sorted_bindings(&self) -> Vec<(&Term, &Term)> {
        let mut bindings: Vec<_> = self.subs.iter().collect();
        bindings.sort();
        bindings
    }
}

impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        match (self.failed, other.failed) {
            (true, true) => true,
            (false, false) => self.subs == other.subs,
            _ => false,
        }
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.failed {
            return write!(f, "FAILED");
        }
        write!(f, "{{")?;
        let bindings = self.sorted_bindings();
        let mut iter = bindings.into_iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.failed {
            return write!(f, "FAILED");
        }
        let bindings: Vec<String> = self
            .sorted_bindings()
            .into_iter()
            .map(|(var, val)| format!("{}/{}", var, val))
            .collect();
        write!(f, "{{{}}}", bindings.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(names: &[&str]) -> Vec<Term> {
        names.iter().map(|&n| Term::new(n)).collect()
    }

    #[test]
    fn it_works() {
        let s = substitution! {z: "A", x: "w", y: "z"};
        assert_eq!(s.walk(&"z".into()), "A");
        assert_eq!(s.walk(&"y".into()), "A");
        assert_eq!(s.walk(&"x".into()), "w");
        assert_eq!(s.walk(&"Q".into()), "Q");
        assert_eq!(s.n_subs(), 3);
    }

    #[test]
    fn walk_stops_on_cyclic_bindings() {
        let s = substitution! {x: "y", y: "x"};
        let end = s.walk(&"x".into()).clone();
        assert!(end == "x" || end == "y");
    }

    #[test]
    fn unify_same_var_does_not_modify_substitution() {
        let x = Term::new("x");
        let sub = Substitution::empty().unify(&x, &x);
        assert_eq!(sub, Substitution::empty());
    }

    #[test]
    fn unify_two_vars_extends_substitution() {
        let sub = Substitution::empty().unify(&"x".into(), &"y".into());
        assert_eq!(sub, substitution! {x: "y"});
    }

    #[test]
    fn variable_becomes_key_regardless_of_position() {
        let left = Substitution::empty().unify_all(&terms(&["x"]), &terms(&["A"]));
        let right = Substitution::empty().unify_all(&terms(&["A"]), &terms(&["x"]));
        assert_eq!(left, substitution! {x: "A"});
        assert_eq!(right, substitution! {x: "A"});
    }

    #[test]
    fn unify_same_constants_does_not_modify_substitution() {
        let theta = substitution! {z: "C"};
        let sub = theta
            .clone()
            .unify_all(&terms(&["A", "B"]), &terms(&["A", "B"]));
        assert_eq!(sub, theta);
    }

    #[test]
    fn unify_different_constants_fails() {
        let sub = Substitution::empty().unify(&"A".into(), &"B".into());
        assert!(sub.is_failed());
    }

    #[test]
    fn unify_lists_of_different_length_fails() {
        let sub = Substitution::empty().unify_all(&terms(&["x"]), &terms(&["x", "y"]));
        assert!(sub.is_failed());
        let sub = Substitution::empty().unify_all(&terms(&["A", "B"]), &terms(&["A"]));
        assert!(sub.is_failed());
    }

    #[test]
    fn unify_empty_lists_keeps_substitution() {
        let theta = substitution! {x: "A"};
        assert_eq!(theta.clone().unify_all(&[], &[]), theta);
    }

    #[test]
    fn failure_propagates_through_the_fold() {
        let sub = Substitution::empty().unify_all(&terms(&["A", "x"]), &terms(&["B", "C"]));
        assert!(sub.is_failed());
        assert_eq!(sub.get(&"x".into()), None);
    }

    #[test]
    fn failed_input_substitution_stays_failed() {
        let sub = Substitution::failure().unify_all(&terms(&["x"]), &terms(&["A"]));
        assert!(sub.is_failed());
    }

    #[test]
    fn bound_variable_is_dereferenced_before_binding() {
        let theta = substitution! {x: "A"};
        let sub = theta.clone().unify(&"x".into(), &"A".into());
        assert_eq!(sub, theta);
        let sub = theta.unify(&"x".into(), &"B".into());
        assert!(sub.is_failed());
    }

    #[test]
    fn bound_term_is_dereferenced_before_binding() {
        let theta = substitution! {y: "A"};
        let sub = theta.unify(&"x".into(), &"y".into());
        assert_eq!(sub, substitution! {y: "A", x: "A"});
    }

    #[test]
    fn repeated_variable_must_agree() {
        let sub = Substitution::empty().unify_all(&terms(&["x", "x"]), &terms(&["A", "B"]));
        assert!(sub.is_failed());
        let sub = Substitution::empty().unify_all(&terms(&["x", "x"]), &terms(&["A", "A"]));
        assert_eq!(sub, substitution! {x: "A"});
    }

    #[test]
    fn binding_a_constant_fails() {
        let sub = Substitution::empty().extend("A".into(), "B".into());
        assert!(sub.is_failed());
    }

    #[test]
    fn binding_a_variable_to_itself_fails() {
        let sub = Substitution::empty().extend("x".into(), "x".into());
        assert!(sub.is_failed());
    }

    #[test]
    fn failed_substitutions_compare_equal_and_bind_nothing() {
        let failed = Substitution::empty().unify(&"A".into(), &"B".into());
        assert_eq!(failed, Substitution::failure());
        assert_ne!(failed, Substitution::empty());
        assert_eq!(failed.bindings().count(), 0);
    }

    #[test]
    fn display_is_sorted() {
        let s = substitution! {y: "B", x: "A"};
        assert_eq!(s.to_string(), "{x/A, y/B}");
        assert_eq!(Substitution::failure().to_string(), "FAILED");
    }

    #[test]
    fn debug_is_sorted() {
        let s = substitution! {z: "C", y: "B", x: "A"};
        assert_eq!(format!("{:?}", s), "{x: A, y: B, z: C}");
        assert_eq!(format!("{:?}", Substitution::empty()), "{}");
        assert_eq!(format!("{:?}", Substitution::failure()), "FAILED");
    }
}
