//! Syntax highlighting for code blocks embedded in static HTML pages.

pub mod driver;
pub mod highlighting;
pub mod language;
pub mod markup;
pub mod output;
pub mod regex;
