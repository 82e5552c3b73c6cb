//! Forgiving HTML parser.
//!
//! This follows what a browser does with the kind of markup found in hand
//! written pages closely enough for the highlighter: a `<` that cannot start
//! a tag is text, closing tags without a matching open element are dropped,
//! a closing tag closes everything opened inside it, and whatever is still
//! open at the end of input is closed there. Only input that leaves a
//! construct hanging at end of input is an error.

use std::borrow::Cow;
use std::fmt;

use crate::markup::{Attribute, Document, Element, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    UnterminatedComment(usize),
    UnterminatedDeclaration(usize),
    UnterminatedTag(usize),
    UnterminatedAttribute(usize),
}

impl MarkupError {
    pub fn offset(&self) -> usize {
        match self {
            MarkupError::UnterminatedComment(offset) => *offset,
            MarkupError::UnterminatedDeclaration(offset) => *offset,
            MarkupError::UnterminatedTag(offset) => *offset,
            MarkupError::UnterminatedAttribute(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MarkupError::UnterminatedComment(_) => "unterminated comment".to_string(),
            MarkupError::UnterminatedDeclaration(_) => "unterminated declaration".to_string(),
            MarkupError::UnterminatedTag(_) => "unterminated tag".to_string(),
            MarkupError::UnterminatedAttribute(_) => "unterminated attribute value".to_string(),
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            MarkupError::UnterminatedComment(_) => {
                "A comment opened with <!-- was never closed with -->."
            }
            MarkupError::UnterminatedDeclaration(_) => {
                "A declaration such as <!DOCTYPE html> is missing its closing >."
            }
            MarkupError::UnterminatedTag(_) => "This tag is missing its closing >.",
            MarkupError::UnterminatedAttribute(_) => {
                "This quoted attribute value is missing its closing quote."
            }
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

/// Parse a whole page.
pub fn parse_document(content: &str) -> Result<Document, MarkupError> {
    let nodes = parse_fragment(content)?;
    Ok(Document { nodes })
}

/// Parse markup meant to become the children of some element, the way
/// assigning `innerHTML` would.
pub fn parse_fragment(content: &str) -> Result<Vec<Node>, MarkupError> {
    let mut input = Parser::new();
    input.initialize(content);
    input.parse_nodes()
}

#[derive(Debug)]
struct Parser<'i> {
    source: &'i str,
    offset: usize,
    open: Vec<Element>,
    nodes: Vec<Node>,
}

impl<'i> Parser<'i> {
    fn new() -> Parser<'i> {
        Parser {
            source: "",
            offset: 0,
            open: Vec::new(),
            nodes: Vec::new(),
        }
    }

    fn initialize(&mut self, content: &'i str) {
        self.source = content;
        self.offset = 0;
        self.open
            .clear();
        self.nodes
            .clear();
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn parse_nodes(&mut self) -> Result<Vec<Node>, MarkupError> {
        while !self.is_finished() {
            let content = self.source;

            if content.starts_with("<!--") {
                self.read_comment()?;
            } else if content.starts_with("<!") {
                self.read_declaration()?;
            } else if is_closing_tag(content) {
                self.read_closing_tag()?;
            } else if is_opening_tag(content) {
                self.read_opening_tag()?;
            } else {
                self.read_text();
            }
        }

        // anything left open is closed at end of input
        while let Some(element) = self
            .open
            .pop()
        {
            self.attach(Node::Element(element));
        }

        Ok(std::mem::take(&mut self.nodes))
    }

    /// Add a node as the last child of the innermost open element, or at
    /// the top level if nothing is open. Adjacent text is merged.
    fn attach(&mut self, node: Node) {
        let siblings = match self
            .open
            .last_mut()
        {
            Some(parent) => &mut parent.children,
            None => &mut self.nodes,
        };

        if let Node::Text(text) = &node {
            if let Some(Node::Text(previous)) = siblings.last_mut() {
                previous.push_str(text);
                return;
            }
        }

        siblings.push(node);
    }

    fn read_text(&mut self) {
        // the first character is text even if it is a '<'
        let first = self
            .source
            .chars()
            .next()
            .map_or(0, char::len_utf8);

        let end = self.source[first..]
            .find('<')
            .map_or(self.source.len(), |i| i + first);

        let text = decode_entities(&self.source[..end]).into_owned();
        self.advance(end);
        self.attach(Node::Text(text));
    }

    fn read_comment(&mut self) -> Result<(), MarkupError> {
        let end = self.source[4..]
            .find("-->")
            .ok_or(MarkupError::UnterminatedComment(self.offset))?;

        let text = self.source[4..4 + end].to_string();
        self.advance(4 + end + 3);
        self.attach(Node::Comment(text));

        Ok(())
    }

    fn read_declaration(&mut self) -> Result<(), MarkupError> {
        let end = self
            .source
            .find('>')
            .ok_or(MarkupError::UnterminatedDeclaration(self.offset))?;

        let text = self.source[2..end].to_string();
        self.advance(end + 1);
        self.attach(Node::Doctype(text));

        Ok(())
    }

    fn read_closing_tag(&mut self) -> Result<(), MarkupError> {
        let end = self
            .source
            .find('>')
            .ok_or(MarkupError::UnterminatedTag(self.offset))?;

        let name = self.source[2..end]
            .split_ascii_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        self.advance(end + 1);

        // close the nearest matching element and everything inside it; a
        // closing tag with nothing to close is dropped
        if let Some(i) = self
            .open
            .iter()
            .rposition(|element| element.name == name)
        {
            while self
                .open
                .len()
                > i
            {
                if let Some(element) = self
                    .open
                    .pop()
                {
                    self.attach(Node::Element(element));
                }
            }
        }

        Ok(())
    }

    fn read_opening_tag(&mut self) -> Result<(), MarkupError> {
        let start = self.offset;
        self.advance(1);

        let name = self.take_name();
        let mut element = Element::new(name);
        let mut self_closing = false;

        loop {
            self.trim_whitespace();

            if self.is_finished() {
                return Err(MarkupError::UnterminatedTag(start));
            } else if self
                .source
                .starts_with("/>")
            {
                self.advance(2);
                self_closing = true;
                break;
            } else if self
                .source
                .starts_with('>')
            {
                self.advance(1);
                break;
            } else if self
                .source
                .starts_with('/')
            {
                self.advance(1);
            } else {
                let attribute = self.read_attribute()?;
                if let Some(attribute) = attribute {
                    element
                        .attributes
                        .push(attribute);
                }
            }
        }

        if self_closing || element.is_void() {
            self.attach(Node::Element(element));
        } else if element.is_raw_text() {
            self.read_raw_text(element);
        } else {
            self.open
                .push(element);
        }

        Ok(())
    }

    /// Tag or attribute name, up to whitespace, `/`, `>`, or `=`.
    fn take_name(&mut self) -> &'i str {
        let content = self.source;
        let end = content
            .find(|c: char| c.is_whitespace() || c == '/' || c == '>' || c == '=')
            .unwrap_or(content.len());

        self.advance(end);
        &content[..end]
    }

    fn read_attribute(&mut self) -> Result<Option<Attribute>, MarkupError> {
        let name = self.take_name();
        if name.is_empty() {
            // a stray '=' where a name should be
            self.advance(1);
            return Ok(None);
        }
        let name = name.to_ascii_lowercase();

        self.trim_whitespace();
        if !self
            .source
            .starts_with('=')
        {
            return Ok(Some(Attribute { name, value: None }));
        }
        self.advance(1);
        self.trim_whitespace();

        let value = match self
            .source
            .chars()
            .next()
        {
            Some(quote @ ('"' | '\'')) => {
                let end = self.source[1..]
                    .find(quote)
                    .ok_or(MarkupError::UnterminatedAttribute(self.offset))?;
                let value = decode_entities(&self.source[1..1 + end]).into_owned();
                self.advance(1 + end + 1);
                value
            }
            _ => {
                let content = self.source;
                let end = content
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(content.len());
                self.advance(end);
                decode_entities(&content[..end]).into_owned()
            }
        };

        Ok(Some(Attribute {
            name,
            value: Some(value),
        }))
    }

    /// Content of `<script>` and `<style>` runs verbatim up to the matching
    /// closing tag, which is then read normally.
    fn read_raw_text(&mut self, mut element: Element) {
        let needle = format!("</{}", element.name);
        let end = self
            .source
            .to_ascii_lowercase()
            .find(&needle)
            .unwrap_or(self.source.len());

        if end > 0 {
            element
                .children
                .push(Node::Text(self.source[..end].to_string()));
            self.advance(end);
        }

        self.open
            .push(element);
    }

    fn trim_whitespace(&mut self) {
        let content = self.source;
        let trimmed = content.trim_start();
        self.advance(content.len() - trimmed.len());
    }
}

fn is_opening_tag(content: &str) -> bool {
    let mut chars = content.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic())
}

fn is_closing_tag(content: &str) -> bool {
    match content.strip_prefix("</") {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic()),
        None => false,
    }
}

/// Replace character references with the characters they name, drawing on
/// the full HTML5 table. Anything that is not a reference is left as written.
fn decode_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
