//! Recovering the literal code held by a block

use crate::markup::{Element, Node};

/// The code a block was meant to show. Text nodes contribute their text.
/// Elements contribute their tag name in brackets followed by their own
/// content: in a page where `#include <vector>` was written without
/// escaping, the parser has turned `<vector>` into an element and this is
/// how it gets back into the code. Non-breaking spaces become plain
/// spaces.
pub fn extract_text(block: &Element) -> String {
    let mut result = String::new();
    walk(&block.children, &mut result);

    if result.contains('\u{a0}') {
        result = result.replace('\u{a0}', " ");
    }
    result
}

fn walk(nodes: &[Node], result: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => result.push_str(text),
            Node::Element(element) => {
                result.push('<');
                result.push_str(&element.name);
                result.push('>');
                walk(&element.children, result);
            }
            Node::Comment(text) => {
                result.push_str("<!--");
                result.push_str(text);
                result.push_str("-->");
            }
            Node::Doctype(text) => {
                result.push_str("<!");
                result.push_str(text);
                result.push('>');
            }
        }
    }
}
