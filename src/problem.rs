//! Problem files: queries plus the knowledge base they are asked against.
//!
//! ```text
//! 2              <- number of queries
//! Mortal(Plato)
//! ~Mortal(Zeus)
//! 2              <- number of clauses
//! Man(x) => Mortal(x)
//! Man(Plato)
//! ```
//!
//! Answers are written one per line, `TRUE` or `FALSE`, in query order.

use crate::config::SearchLimits;
use crate::core::predicate::Predicate;
use crate::database::KnowledgeBase;
use crate::error::{Error, Result};
use crate::parser::{parse_clause, parse_predicate};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub queries: Vec<Predicate>,
    pub knowledge_base: KnowledgeBase,
}

impl Problem {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        Problem::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = Lines::new(text);

        let n = lines.count()?;
        let mut queries = Vec::with_capacity(n);
        for _ in 0..n {
            let (line_no, line) = lines.next_line("query")?;
            queries.push(parse_predicate(line).map_err(|e| at_line(line_no, e))?);
        }

        let m = lines.count()?;
        let mut knowledge_base = KnowledgeBase::new();
        for _ in 0..m {
            let (line_no, line) = lines.next_line("clause")?;
            knowledge_base.add_clause(parse_clause(line).map_err(|e| at_line(line_no, e))?);
        }

        Ok(Problem {
            queries,
            knowledge_base,
        })
    }

    /// Answer every query in order.
    pub fn solve(&self, limits: &SearchLimits) -> Vec<bool> {
        self.queries
            .iter()
            .map(|goal| {
                let answer = self.knowledge_base.query_with(goal, limits);
                info!(%goal, answer, "answered");
                answer
            })
            .collect()
    }
}

pub fn format_answers(answers: &[bool]) -> String {
    answers
        .iter()
        .map(|&a| if a { "TRUE\n" } else { "FALSE\n" })
        .collect()
}

pub fn write_answers(path: impl AsRef<Path>, answers: &[bool]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, format_answers(answers))
        .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))
}

fn at_line(line: usize, e: Error) -> Error {
    match e {
        Error::Parse { message, .. } => Error::Format { line, message },
        other => other,
    }
}

/// Numbered line reader; numbering starts at 1.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        match self.inner.next() {
            Some((i, line)) => {
                self.last = i + 1;
                Ok((self.last, line.trim()))
            }
            None => Err(Error::Format {
                line: self.last + 1,
                message: format!("expected a {}, found end of input", what),
            }),
        }
    }

    /// Blank lines before a count are skipped.
    fn count(&mut self) -> Result<usize> {
        let (mut line, mut text) = self.next_line("count")?;
        while text.is_empty() {
            let (l, t) = self.next_line("count")?;
            line = l;
            text = t;
        }
        text.parse().map_err(|_| Error::Format {
            line,
            message: format!("expected a count, found `{}`", text),
        })
    }
}
