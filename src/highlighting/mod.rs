//! Highlighting source text into classed HTML.
//!
//! Work happens in four steps: the raw code is HTML-escaped, every rule of
//! the language profile is run over the escaped text to collect candidate
//! tokens, overlapping candidates are resolved into a non-overlapping set
//! of spans, and finally the escaped text is re-emitted with each span
//! wrapped by the chosen renderer. All offsets are into the escaped text so
//! nothing has to be shifted once escaping is done.

mod escape;
mod renderer;
mod resolver;
mod scanner;

pub use escape::{escape, unescape, Escaped};
pub use renderer::{fragments, render, Html, Identity, Render, Terminal};
pub use resolver::{resolve, Span};
pub use scanner::{scan, Token};

use crate::language::Profile;

/// Categories a piece of code can be highlighted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Neutral, // default, never wrapped
    Comment,
    String,
    Preprocessor,
    Number,
    Keyword,
    Builtin,
}

impl Syntax {
    /// The class name stylesheets use for this category.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Syntax::Neutral => None,
            Syntax::Comment => Some("comment"),
            Syntax::String => Some("string"),
            Syntax::Preprocessor => Some("preprocessor"),
            Syntax::Number => Some("number"),
            Syntax::Keyword => Some("keyword"),
            Syntax::Builtin => Some("built-in"),
        }
    }
}

/// Highlight raw source code into an HTML fragment of escaped text and
/// classed `<span>` elements.
pub fn highlight(code: &str, profile: &Profile) -> String {
    highlight_with(&Html, code, profile)
}

/// Highlight raw source code through an arbitrary rendering backend.
pub fn highlight_with(renderer: &impl Render, code: &str, profile: &Profile) -> String {
    let escaped = escape(code);
    let tokens = scan(&escaped, profile);
    let spans = resolve(tokens);

    render(renderer, &escaped, &spans)
}
