//! Language keys and the rule sets that describe how each one is tokenized

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::highlighting::Syntax;

use super::profiles;

/// A source language with a rule set. Code blocks name their language with
/// a free-form key; `from_key()` folds the accepted spellings onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Cpp,
    JavaScript,
}

pub const LANGUAGES: [Language; 3] = [Language::Python, Language::Cpp, Language::JavaScript];

impl Language {
    /// Normalize a language key as written in markup or on the command
    /// line. Unknown keys give `None`; choosing a fallback is up to the
    /// caller.
    pub fn from_key(key: &str) -> Option<Language> {
        let key = key
            .trim()
            .to_ascii_lowercase();

        LANGUAGES
            .iter()
            .copied()
            .find(|language| {
                language
                    .aliases()
                    .iter()
                    .any(|alias| *alias == key)
            })
    }

    /// Guess from a filename extension, using the same aliases as keys.
    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Language::from_key)
    }

    /// The canonical key, as recorded on highlighted elements.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
        }
    }

    /// Human readable name, used for accessibility labels.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::JavaScript => "JavaScript",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "python"],
            Language::Cpp => &["c", "cpp", "c++", "cxx", "h", "hpp"],
            Language::JavaScript => &["js", "javascript"],
        }
    }

    /// The rule set for this language. Profiles are built on first use and
    /// shared for the life of the process.
    pub fn profile(&self) -> &'static Profile {
        match self {
            Language::Python => profiles::python(),
            Language::Cpp => profiles::cpp(),
            Language::JavaScript => profiles::javascript(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One pattern and the category it assigns to whatever it matches. When
/// matches from different rules overlap at the same offset the rule with
/// the lower priority value wins.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    syntax: Syntax,
    priority: u8,
}

impl Rule {
    pub fn new(pattern: &str, syntax: Syntax, priority: u8) -> Rule {
        Rule {
            pattern: crate::regex::compile(pattern),
            syntax,
            priority,
        }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }
}

/// The ordered rule set for one language. Patterns are matched against
/// HTML-escaped text, so anything that would otherwise look for `<` or `&`
/// must look for the entity instead.
#[derive(Debug, Clone)]
pub struct Profile {
    language: Language,
    rules: Vec<Rule>,
}

impl Profile {
    pub fn new(language: Language, rules: Vec<Rule>) -> Profile {
        Profile { language, rules }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
