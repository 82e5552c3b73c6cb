//! Escaping of code text for embedding in HTML

use std::borrow::Cow;
use std::ops::Range;

/// Code text with `&`, `<`, and `>` replaced by entities, along with where
/// each entity landed. Token offsets are taken against this text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped {
    text: String,
    entities: Vec<Range<usize>>,
}

impl Escaped {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.text
            .is_empty()
    }

    /// Whether an offset falls strictly inside one of the entities, such
    /// that cutting the text there would break it in two.
    pub fn splits_entity(&self, offset: usize) -> bool {
        let i = self
            .entities
            .partition_point(|entity| entity.end <= offset);

        match self
            .entities
            .get(i)
        {
            Some(entity) => entity.start < offset,
            None => false,
        }
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Escape the HTML-significant characters of some raw text. Quotes are left
/// alone; the output only ever lands in element content.
pub fn escape(raw: &str) -> Escaped {
    let mut text = String::with_capacity(raw.len() + raw.len() / 8);
    let mut entities = Vec::new();

    for c in raw.chars() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            _ => {
                text.push(c);
                continue;
            }
        };
        let start = text.len();
        text.push_str(entity);
        entities.push(start..text.len());
    }

    Escaped { text, entities }
}

/// Reverse `escape()`, for backends that want the literal characters back.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let result = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    Cow::Owned(result)
}
