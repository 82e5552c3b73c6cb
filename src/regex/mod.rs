//! Compile-once regular expressions

/// Compile a constant pattern the first time it is used and hand back the
/// same `Regex` on every later call from that site. An invalid pattern is a
/// programming error and panics on first use.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Compile a pattern that lives in a rule table. Used while building the
/// language profiles, which are themselves built once.
pub(crate) fn compile(pattern: &str) -> ::regex::Regex {
    ::regex::Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {:?}: {}", pattern, e))
}
