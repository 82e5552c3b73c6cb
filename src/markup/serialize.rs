//! Writing a tree back out as HTML

use crate::markup::{Element, Node};

pub fn to_html(nodes: &[Node]) -> String {
    let mut output = String::new();
    write_nodes(&mut output, nodes, false);
    output
}

/// Append the serialized nodes to `output`. Inside `<script>` and `<style>`
/// text is written verbatim.
fn write_nodes(output: &mut String, nodes: &[Node], raw: bool) {
    for node in nodes {
        match node {
            Node::Text(text) if raw => output.push_str(text),
            Node::Text(text) => escape_text(output, text),
            Node::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            Node::Doctype(text) => {
                output.push_str("<!");
                output.push_str(text);
                output.push('>');
            }
            Node::Element(element) => write_element(output, element),
        }
    }
}

fn write_element(output: &mut String, element: &Element) {
    output.push('<');
    output.push_str(&element.name);

    for attribute in &element.attributes {
        output.push(' ');
        output.push_str(&attribute.name);
        if let Some(value) = &attribute.value {
            output.push_str("=\"");
            escape_attribute(output, value);
            output.push('"');
        }
    }
    output.push('>');

    if element.is_void() {
        return;
    }

    write_nodes(output, &element.children, element.is_raw_text());

    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

fn escape_text(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

fn escape_attribute(output: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}
