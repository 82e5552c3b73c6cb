//! Token scanner: run every rule of a profile over escaped text

use tracing::trace;

use crate::highlighting::{Escaped, Syntax};
use crate::language::Profile;

/// A candidate match from one rule, as a half-open byte range over the
/// escaped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub syntax: Syntax,
    pub priority: u8,
}

/// Collect every match of every rule in the profile. Tokens are grouped by
/// rule in the order the profile lists them; nothing is sorted and
/// overlaps are left for the resolver.
///
/// Empty matches are skipped, as are matches whose either end would land in
/// the middle of an entity such as `&lt;`.
pub fn scan(escaped: &Escaped, profile: &Profile) -> Vec<Token> {
    let text = escaped.as_str();
    let mut tokens = Vec::new();

    for rule in profile.rules() {
        for found in rule
            .pattern()
            .find_iter(text)
        {
            if found.is_empty() {
                continue;
            }
            if escaped.splits_entity(found.start()) || escaped.splits_entity(found.end()) {
                trace!(start = found.start(), end = found.end(), "match splits an entity");
                continue;
            }

            tokens.push(Token {
                start: found.start(),
                end: found.end(),
                syntax: rule.syntax(),
                priority: rule.priority(),
            });
        }
    }

    tokens
}
