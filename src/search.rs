//! Backward-chaining resolution.
//!
//! A goal is proved by OR-search: every clause whose consequent matches
//! the goal is renamed apart, its consequent unified with the goal, and its
//! antecedents proved by AND-search. AND-search proves a conjunction left to
//! right, threading each proof of the first goal into the remaining ones.
//! All proofs are enumerated eagerly.
//!
//! Ground goals that are already being proved further up the current
//! branch are cut, which stops infinite recursion through cyclic rules
//! as long as the cycle is ground.

use crate::config::SearchLimits;
use crate::core::clause::Clause;
use crate::core::predicate::Predicate;
use crate::core::substitution::Substitution;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// State of one top-level query.
///
/// Created fresh for every query, so nothing leaks between queries.
pub struct Search<'kb> {
    clauses: &'kb [Clause],
    limits: SearchLimits,
    // next standardization id
    next_id: usize,
    // ground goals on the active branch
    visited: HashSet<Predicate>,
    depth: usize,
    // branches cut by the depth limit
    cut: usize,
}

impl<'kb> Search<'kb> {
    pub fn new(clauses: &'kb [Clause], limits: SearchLimits) -> Self {
        Search {
            clauses,
            limits,
            next_id: 0,
            visited: HashSet::new(),
            depth: 0,
            cut: 0,
        }
    }

    /// Enumerate every substitution under which `goal` is provable.
    pub fn prove(&mut self, goal: &Predicate) -> Vec<Substitution> {
        let proofs = self.back_chain_or(goal, &Substitution::empty());
        if self.cut > 0 {
            warn!(%goal, branches = self.cut, "depth limit reached, proofs may be missing");
        }
        proofs
    }

    /// Try every clause whose consequent matches `goal`.
    pub fn back_chain_or(&mut self, goal: &Predicate, theta: &Substitution) -> Vec<Substitution> {
        if let Some(max_depth) = self.limits.max_depth {
            if self.depth >= max_depth {
                debug!(%goal, max_depth, "depth limit reached, branch cut");
                self.cut += 1;
                return vec![];
            }
        }

        let ground = goal.is_ground();
        if ground && !self.visited.insert(goal.clone()) {
            debug!(%goal, "goal already on this branch, cycle cut");
            return vec![];
        }

        trace!(%goal, %theta, depth = self.depth, "or");
        self.depth += 1;

        let mut proofs = vec![];
        let clauses = self.clauses;
        for clause in clauses {
            let clause = clause.standardize(self.next_id);
            self.next_id += 1;

            let head = clause.consequent();
            if !goal.matches(head) {
                continue;
            }
            trace!(%clause, "trying");
            let unified = theta.clone().unify_all(head.args(), goal.args());
            proofs.extend(
                self.back_chain_and(clause.antecedents(), unified)
                    .into_iter()
                    .filter(|s| !s.is_failed()),
            );
        }

        self.depth -= 1;
        if ground {
            self.visited.remove(goal);
        }
        proofs
    }

    /// Prove every goal in `goals` in order.
    pub fn back_chain_and(&mut self, goals: &[Predicate], theta: Substitution) -> Vec<Substitution> {
        if theta.is_failed() {
            return vec![theta];
        }
        let (first, rest) = match goals.split_first() {
            None => return vec![theta],
            Some(split) => split,
        };

        let first = first.substitute(&theta);
        let mut proofs = vec![];
        for theta1 in self.back_chain_or(&first, &theta) {
            proofs.extend(
                self.back_chain_and(rest, theta1)
                    .into_iter()
                    .filter(|s| !s.is_failed()),
            );
        }
        proofs
    }
}
