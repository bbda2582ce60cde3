pub use crate::{
    config::SearchLimits,
    core::{clause::Clause, predicate::Predicate, substitution::Substitution, term::Term},
    database::KnowledgeBase,
    error::{Error, Result},
    parser::{parse_clause, parse_predicate},
    problem::Problem,
};
