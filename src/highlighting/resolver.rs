//! Interval resolver: pick a non-overlapping set of spans from candidates

use crate::highlighting::{Syntax, Token};

/// A token that survived resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub syntax: Syntax,
}

impl From<Token> for Span {
    fn from(token: Token) -> Self {
        Span {
            start: token.start,
            end: token.end,
            syntax: token.syntax,
        }
    }
}

/// Order candidates by start offset then priority, and sweep once keeping
/// each candidate that begins at or after the end of the last one kept.
/// The result is sorted by start and no two spans share an offset. Among
/// candidates starting at the same place the lowest priority value wins,
/// and anything starting inside an accepted span is dropped, which is what
/// keeps keywords inside strings and comments from being highlighted.
pub fn resolve(mut tokens: Vec<Token>) -> Vec<Span> {
    // stable, so equal (start, priority) pairs keep the profile's rule order
    tokens.sort_by_key(|token| (token.start, token.priority));

    let mut spans: Vec<Span> = Vec::with_capacity(tokens.len());
    let mut last = 0;

    for token in tokens {
        if token.start < last {
            continue;
        }
        last = token.end;
        spans.push(token.into());
    }

    spans
}
