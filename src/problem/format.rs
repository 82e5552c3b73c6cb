use highlighter::language::LoadingError;
use highlighter::markup::MarkupError;
use highlighter::output::OutputError;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a markup error with the offending line of the page and a caret
/// under the position where things went wrong.
pub fn full_markup_error(error: &MarkupError, filename: &Path, source: &str) -> String {
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .message()
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        error.details()
    )
    .trim_ascii()
    .to_string()
}

/// Format a loading error; there is no source to show, only the file.
pub fn full_loading_error(error: &LoadingError) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .to_string_lossy(),
        error
            .problem
            .bold()
    );

    if !error
        .details
        .is_empty()
    {
        result.push_str("\n\n");
        result.push_str(&error.details);
    }

    result
}

pub fn full_output_error(error: &OutputError) -> String {
    format!(
        "{}: {}\n\n{}",
        "error".bright_red(),
        error
            .problem
            .bold(),
        error.details
    )
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => offset - start - 1,
        None => offset,
    }
}
