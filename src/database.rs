use crate::config::SearchLimits;
use crate::core::clause::Clause;
use crate::core::predicate::Predicate;
use crate::core::substitution::Substitution;
use crate::error::Result;
use crate::parser::parse_clause;
use crate::search::Search;
use std::fmt::Formatter;
use tracing::debug;

/// An ordered collection of Horn clauses.
///
/// Clauses are tried in insertion order. Queries never modify the
/// knowledge base; every query works on renamed copies of its clauses.
#[derive(Clone, Default)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        KnowledgeBase { clauses: vec![] }
    }

    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        self.clauses.push(clause.into())
    }

    /// Parse `sentence` as a fact or rule and append it.
    pub fn add_sentence(&mut self, sentence: &str) -> Result<()> {
        self.add_clause(parse_clause(sentence)?);
        Ok(())
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns `true` if `goal` is entailed by the knowledge base.
    pub fn query(&self, goal: &Predicate) -> bool {
        self.query_with(goal, &SearchLimits::default())
    }

    pub fn query_with(&self, goal: &Predicate, limits: &SearchLimits) -> bool {
        !self.proofs_with(goal, limits).is_empty()
    }

    /// Every substitution under which `goal` is provable.
    pub fn proofs(&self, goal: &Predicate) -> Vec<Substitution> {
        self.proofs_with(goal, &SearchLimits::default())
    }

    pub fn proofs_with(&self, goal: &Predicate, limits: &SearchLimits) -> Vec<Substitution> {
        let proofs = Search::new(&self.clauses, *limits).prove(goal);
        debug!(%goal, proofs = proofs.len(), "query complete");
        proofs
    }
}

impl Extend<Clause> for KnowledgeBase {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        self.clauses.extend(iter)
    }
}

impl std::iter::FromIterator<Clause> for KnowledgeBase {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        KnowledgeBase {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "Knowledge Base:")?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_list().entries(&self.clauses).finish()
    }
}
