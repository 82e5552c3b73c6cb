//! Languages the highlighter knows about, and the rules that tokenize them

mod error;
mod profiles;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
