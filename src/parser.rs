//! Parse predicates and clauses from text.
//!
//! A fact is written `[~]Name(arg1,arg2,...)`, a rule as
//! `Antecedent1 ^ Antecedent2 ^ ... => Consequent`.

use crate::core::clause::Clause;
use crate::core::predicate::Predicate;
use crate::core::term::Term;
use crate::error::{Error, Result};
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::str::FromStr;

#[derive(Parser)]
#[grammar = "clause.pest"]
struct ClauseParser;

impl From<pest::error::Error<Rule>> for Error {
    fn from(e: pest::error::Error<Rule>) -> Self {
        let (line, col) = match e.line_col {
            LineColLocation::Pos((line, col)) => (line, col),
            LineColLocation::Span((line, col), _) => (line, col),
        };
        Error::Parse {
            message: e.variant.message().into_owned(),
            line: Some(line),
            col: Some(col),
        }
    }
}

/// Parse a single, possibly negated, predicate.
pub fn parse_predicate(text: &str) -> Result<Predicate> {
    let query = ClauseParser::parse(Rule::query, text)?
        .next()
        .ok_or_else(|| missing("query", text))?;
    let predicate = query
        .into_inner()
        .next()
        .ok_or_else(|| missing("predicate", text))?;
    Ok(build_predicate(predicate))
}

/// Parse a fact or a rule.
pub fn parse_clause(text: &str) -> Result<Clause> {
    let clause = ClauseParser::parse(Rule::clause, text)?
        .next()
        .ok_or_else(|| missing("clause", text))?;
    let body = clause
        .into_inner()
        .next()
        .ok_or_else(|| missing("clause body", text))?;

    match body.as_rule() {
        Rule::implication => {
            let mut predicates: Vec<Predicate> = body.into_inner().map(build_predicate).collect();
            let consequent = predicates
                .pop()
                .ok_or_else(|| missing("consequent", text))?;
            Ok(Clause::rule(predicates, consequent))
        }
        _ => Ok(Clause::fact(build_predicate(body))),
    }
}

fn build_predicate(pair: Pair<Rule>) -> Predicate {
    let mut negated = false;
    let mut name = "";
    let mut args = vec![];
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::negation => negated = true,
            Rule::name => name = part.as_str(),
            _ => args.push(Term::new(part.as_str())),
        }
    }
    if negated {
        Predicate::negated(name, args)
    } else {
        Predicate::new(name, args)
    }
}

fn missing(what: &str, text: &str) -> Error {
    Error::Parse {
        message: format!("no {} in `{}`", what, text),
        line: None,
        col: None,
    }
}

impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_predicate(s)
    }
}

impl FromStr for Clause {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_clause(s)
    }
}
