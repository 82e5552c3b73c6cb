//! Renderers for the highlighted fragments

use owo_colors::OwoColorize;

use crate::highlighting::{unescape, Escaped, Span, Syntax};

/// Trait for the different rendering backends (the no-op one, HTML spans
/// for pages, ANSI escapes for terminal output). Content handed to a
/// backend is always a piece of the escaped text.
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

/// Wrap highlighted fragments in a `<span>` whose class names the
/// category. Neutral text passes through as is.
pub struct Html;

impl Render for Html {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax.class() {
            Some(class) => format!(r#"<span class="{}">{}</span>"#, class, content),
            None => content.to_string(),
        }
    }
}

/// Embellish fragments with ANSI escapes for syntax highlighting in
/// terminal output. Entities are turned back into the characters they
/// stand for.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        let content = unescape(content);

        match syntax {
            Syntax::Neutral => content.into_owned(),
            Syntax::Comment => content // comment - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .italic()
                .to_string(),
            Syntax::String => content // string - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::Preprocessor => content // meta.preprocessor - #75507b (plum) bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Number => content // constant.numeric - #ad7fa8 (purple)
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .to_string(),
            Syntax::Keyword => content // keyword.control - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Builtin => content // support.function - #c4a000 (mustard)
                .color(owo_colors::Rgb(0xc4, 0xa0, 0x00))
                .to_string(),
        }
    }
}

/// Rendering happens in two passes. First the escaped text is cut into
/// fragments (Syntax tag, &str pairs) with every gap between spans kept as
/// a Neutral fragment. Then the renderer is applied to each fragment and
/// the results joined.
pub fn render(renderer: &impl Render, escaped: &Escaped, spans: &[Span]) -> String {
    // Pass 1: cut the escaped text into tagged fragments
    let fragments = fragments(escaped.as_str(), spans);

    // Pass 2: apply markup to each fragment and combine
    render_to_string(renderer, fragments)
}

/// Pass 1. The fragments, concatenated, are exactly the input text; spans
/// must be sorted and non-overlapping, as `resolve()` returns them.
pub fn fragments<'i>(text: &'i str, spans: &[Span]) -> Vec<(Syntax, &'i str)> {
    let mut result = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            result.push((Syntax::Neutral, &text[cursor..span.start]));
        }
        result.push((span.syntax, &text[span.start..span.end]));
        cursor = span.end;
    }

    if cursor < text.len() {
        result.push((Syntax::Neutral, &text[cursor..]));
    }

    result
}

/// Pass 2. Unlike document formatting nothing is appended; code blocks keep
/// their whitespace exactly.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, &str)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, content);
        output.push_str(&rendered);
    }

    output
}
