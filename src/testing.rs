use crate::core::clause::Clause;
use crate::core::predicate::Predicate;
use crate::database::KnowledgeBase;
use crate::parser::{parse_clause, parse_predicate};

/// Parse each sentence into a clause
pub fn clauses(sentences: &[&str]) -> Vec<Clause> {
    sentences
        .iter()
        .map(|s| parse_clause(s).unwrap_or_else(|e| panic!("{}: {}", s, e)))
        .collect()
}

pub fn knowledge_base(sentences: &[&str]) -> KnowledgeBase {
    clauses(sentences).into_iter().collect()
}

fn goal(query: &str) -> Predicate {
    parse_predicate(query).unwrap_or_else(|e| panic!("{}: {}", query, e))
}

/// Assert that a query is entailed
pub fn succeeds(kb: &KnowledgeBase, query: &str) {
    assert!(kb.query(&goal(query)), "expected {} to be entailed", query);
}

/// Assert that a query is not entailed
pub fn fails(kb: &KnowledgeBase, query: &str) {
    assert!(!kb.query(&goal(query)), "expected {} not to be entailed", query);
}
