//! Entailment queries against a knowledge base of first-order Horn clauses.
//!
//! Facts and rules (`A ^ B => C`) are collected in a [`database::KnowledgeBase`].
//! A query asks whether a single predicate follows from them; it is answered
//! by backward chaining with syntactic unification (see [`search`]).
//!
//! Terms are plain names. A name consisting only of lowercase ASCII letters
//! and digits is a variable, every other name is a constant.
//!
//! ```
//! use horn_logic::prelude::*;
//!
//! let mut kb = KnowledgeBase::new();
//! kb.add_sentence("Man(x) => Mortal(x)").unwrap();
//! kb.add_sentence("Man(Socrates)").unwrap();
//!
//! assert!(kb.query(&"Mortal(Socrates)".parse().unwrap()));
//! assert!(!kb.query(&"Mortal(Zeus)".parse().unwrap()));
//! ```

#[macro_use]
pub mod macros;
pub mod config;
pub mod core;
pub mod database;
pub mod error;
pub mod parser;
pub mod prelude;
pub mod problem;
pub mod search;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn it_works() {
        let mut kb = KnowledgeBase::new();
        kb.add_clause(predicate!(Parent(Ann, Bob)));
        kb.add_clause(predicate!(Parent(Bob, Cid)));
        kb.add_clause(Clause::rule(
            vec![predicate!(Parent(x, y))],
            predicate!(Ancestor(x, y)),
        ));
        kb.add_clause(Clause::rule(
            vec![predicate!(Parent(x, y)), predicate!(Ancestor(y, z))],
            predicate!(Ancestor(x, z)),
        ));

        assert!(kb.query(&predicate!(Ancestor(Ann, Bob))));
        assert!(kb.query(&predicate!(Ancestor(Ann, Cid))));
        assert!(!kb.query(&predicate!(Ancestor(Cid, Ann))));
        assert!(!kb.query(&predicate!(~Ancestor(Ann, Bob))));

        let descendants: Vec<String> = kb
            .proofs(&predicate!(Ancestor(Ann, q)))
            .iter()
            .map(|s| s.walk(&Term::new("q")).to_string())
            .collect();
        assert_eq!(descendants, vec!["Bob", "Cid"]);

        assert_eq!(
            Substitution::empty().unify_all(
                &[Term::new("x"), Term::new("B")],
                &[Term::new("A"), Term::new("y")]
            ),
            substitution! {x: "A", y: "B"}
        );
    }
}
