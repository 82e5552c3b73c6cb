//! Output generation for the highlighter CLI

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::{debug, info};

use crate::language::Language;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{stylesheet | unescaped}
</style>
</head>
<body>
<pre class="code-block" data-lang="{language}"><code class="language-{language} highlighted" data-language="{language}">{body | unescaped}</code></pre>
</body>
</html>
"#;

/// Colours for each of the category classes the highlighter emits.
pub static STYLESHEET: &'static str = r#"pre { background: #f8f8f6; padding: 1em; overflow-x: auto; }
code .comment { color: #8a8a8a; font-style: italic; }
code .string { color: #4e9a06; }
code .preprocessor { color: #75507b; font-weight: bold; }
code .number { color: #ad7fa8; }
code .keyword { color: #3465a4; font-weight: bold; }
code .built-in { color: #c4a000; }"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    language: &'a str,
    stylesheet: &'a str,
    body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Wrap an already highlighted fragment in a complete page with the
/// default stylesheet. The title is escaped; the body is inserted as is.
pub fn standalone(title: &str, language: Language, body: &str) -> Result<String, OutputError> {
    let mut tt = TinyTemplate::new();
    tt.add_template("page", TEMPLATE)
        .map_err(|error| OutputError {
            problem: "Invalid page template".to_string(),
            details: error.to_string(),
        })?;

    let context = Context {
        title,
        language: language.key(),
        stylesheet: STYLESHEET,
        body,
    };

    tt.render("page", &context)
        .map_err(|error| OutputError {
            problem: "Failed rendering page".to_string(),
            details: error.to_string(),
        })
}

/// Write the result to the named file, or to standard output if there
/// isn't one.
pub fn emit(target: Option<&Path>, content: &str) -> Result<(), OutputError> {
    let result = match target {
        Some(path) => {
            info!("Writing file: {}", path.display());
            std::fs::write(path, content)
        }
        None => {
            debug!("Writing {} bytes to standard output", content.len());
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
        }
    };

    result.map_err(|error| OutputError {
        problem: match target {
            Some(path) => format!("Failed writing {}", path.display()),
            None => "Failed writing standard output".to_string(),
        },
        details: error
            .kind()
            .to_string(),
    })
}
