//! Rule tables for the supported languages.
//!
//! Priorities decide who keeps overlapping text: comments and strings must
//! always beat anything that happens to look like a keyword or number
//! inside them, and triple-quoted strings must beat the ordinary quote
//! rules so `"""` is not read as an empty string followed by a quote.

use std::sync::OnceLock;

use crate::highlighting::Syntax;

use super::{Language, Profile, Rule};

const TRIPLE_STRING: u8 = 0;
const COMMENT: u8 = 1;
const STRING: u8 = 2;
const PREPROCESSOR: u8 = 3;
const BUILTIN: u8 = 4;
const KEYWORD: u8 = 5;
const NUMBER: u8 = 6;

// Quoted strings stop at the end of a line so that a stray quote does not
// swallow the rest of the block.
const DOUBLE_QUOTED: &str = r#""(?:\\.|[^"\\\n])*""#;
const SINGLE_QUOTED: &str = r#"'(?:\\.|[^'\\\n])*'"#;

const LINE_COMMENT: &str = r"(?m)//.*$";
const BLOCK_COMMENT: &str = r"(?s)/\*.*?\*/";

pub(super) fn python() -> &'static Profile {
    static PROFILE: OnceLock<Profile> = OnceLock::new();
    PROFILE.get_or_init(|| {
        Profile::new(
            Language::Python,
            vec![
                Rule::new(r#"(?s)""".*?""""#, Syntax::String, TRIPLE_STRING),
                Rule::new(r"(?s)'''.*?'''", Syntax::String, TRIPLE_STRING),
                Rule::new(r"(?m)#.*$", Syntax::Comment, COMMENT),
                Rule::new(DOUBLE_QUOTED, Syntax::String, STRING),
                Rule::new(SINGLE_QUOTED, Syntax::String, STRING),
                Rule::new(
                    r"\b(?:print|len|range|enumerate|zip|map|filter|sum|max|min|abs|round|str|int|float|list|dict|set|tuple)\b",
                    Syntax::Builtin,
                    BUILTIN,
                ),
                Rule::new(
                    r"\b(?:def|class|if|else|elif|for|while|try|except|finally|import|from|return|break|continue|pass|lambda|with|as|in|not|and|or|is|None|True|False|global|nonlocal|yield|async|await)\b",
                    Syntax::Keyword,
                    KEYWORD,
                ),
                Rule::new(r"\b\d+\.?\d*\b", Syntax::Number, NUMBER),
            ],
        )
    })
}

pub(super) fn cpp() -> &'static Profile {
    static PROFILE: OnceLock<Profile> = OnceLock::new();
    PROFILE.get_or_init(|| {
        Profile::new(
            Language::Cpp,
            vec![
                Rule::new(LINE_COMMENT, Syntax::Comment, COMMENT),
                Rule::new(BLOCK_COMMENT, Syntax::Comment, COMMENT),
                Rule::new(DOUBLE_QUOTED, Syntax::String, STRING),
                Rule::new(SINGLE_QUOTED, Syntax::String, STRING),
                // the directive and the rest of its line
                Rule::new(r"(?m)#[ \t]*[A-Za-z_]\w*.*$", Syntax::Preprocessor, PREPROCESSOR),
                Rule::new(
                    r"\b(?:cout|cin|endl|printf|scanf|malloc|free|sizeof|std)\b",
                    Syntax::Builtin,
                    BUILTIN,
                ),
                Rule::new(
                    r"\b(?:int|float|double|char|bool|void|string|auto|const|static|class|struct|enum|namespace|using|if|else|for|while|do|switch|case|default|break|continue|return|public|private|protected|virtual|override|template|typename|sizeof|new|delete|this|true|false|nullptr)\b",
                    Syntax::Keyword,
                    KEYWORD,
                ),
                Rule::new(r"\b\d+\.?\d*f?\b", Syntax::Number, NUMBER),
            ],
        )
    })
}

pub(super) fn javascript() -> &'static Profile {
    static PROFILE: OnceLock<Profile> = OnceLock::new();
    PROFILE.get_or_init(|| {
        Profile::new(
            Language::JavaScript,
            vec![
                Rule::new(LINE_COMMENT, Syntax::Comment, COMMENT),
                Rule::new(BLOCK_COMMENT, Syntax::Comment, COMMENT),
                Rule::new(DOUBLE_QUOTED, Syntax::String, STRING),
                Rule::new(SINGLE_QUOTED, Syntax::String, STRING),
                // template literals may span lines
                Rule::new(r"(?s)`(?:\\.|[^`\\])*`", Syntax::String, STRING),
                Rule::new(
                    r"\b(?:console|document|window|Array|Object|String|Number|Boolean|Date|Math|JSON|Promise)\b",
                    Syntax::Builtin,
                    BUILTIN,
                ),
                Rule::new(
                    r"\b(?:function|var|let|const|if|else|for|while|do|switch|case|break|continue|return|class|extends|constructor|super|this|new|typeof|instanceof|true|false|null|undefined|async|await|try|catch|finally|throw)\b",
                    Syntax::Keyword,
                    KEYWORD,
                ),
                Rule::new(r"\b\d+\.?\d*\b", Syntax::Number, NUMBER),
            ],
        )
    })
}
