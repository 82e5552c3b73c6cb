//! A minimal HTML tree: enough structure to find code blocks in a page,
//! rewrite their content, and write the page back out.

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

mod parser;
mod serialize;

pub use parser::{parse_document, parse_fragment, MarkupError};
pub use serialize::to_html;

/// Elements that never have content or a closing tag.
pub(crate) const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is taken verbatim, without looking for tags or
/// entities.
pub(crate) const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn to_html(&self) -> String {
        to_html(&self.nodes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Comment(String),
    Doctype(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Element {
        Element {
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| {
                attribute
                    .value
                    .as_deref()
                    .unwrap_or("")
            })
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(attribute) => attribute.value = Some(value.to_string()),
            None => self
                .attributes
                .push(Attribute {
                    name: name.to_string(),
                    value: Some(value.to_string()),
                }),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or("")
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes()
            .any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attribute("class", &classes);
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        collect_text(&self.children, &mut result);
        result
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    pub fn is_raw_text(&self) -> bool {
        RAW_TEXT_ELEMENTS.contains(&self.name.as_str())
    }
}

fn collect_text(nodes: &[Node], result: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => result.push_str(text),
            Node::Element(element) => collect_text(&element.children, result),
            Node::Comment(_) | Node::Doctype(_) => {}
        }
    }
}

/// Read a file and return an owned String; a filename of `-` reads
/// standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
