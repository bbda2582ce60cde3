//! Core data structures and the unification algorithm

pub mod clause;
pub mod predicate;
pub mod substitution;
pub mod term;
