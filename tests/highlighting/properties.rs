#[cfg(test)]
mod verify {
    use highlighter::highlighting::*;
    use highlighter::language::*;
    use highlighter::markup::{parse_fragment, Element, Node};

    /// Snippets with awkward whitespace, stray markup characters, and
    /// unterminated constructs, paired with the language to read them as.
    fn corpus() -> Vec<(Language, &'static str)> {
        vec![
            (Language::Python, ""),
            (Language::Python, "def f(x):\n\treturn x  \n\n\n# done\r\n"),
            (Language::Python, "if a < b and b > c:\n    print(\"a<b\" & 'c>d')\n"),
            (Language::Python, "s = \"unterminated\nx = '''also\nunterminated"),
            (Language::Python, "\"\"\"doc # with hash\"\"\" and more # comment"),
            (Language::Cpp, "#include <vector>\n#include \"local.h\"\n\nint main() {\n    return 0; /* multi\n line */\n}\n"),
            (Language::Cpp, "std::cout << \"a && b\" << std::endl; // 1 < 2\n"),
            (Language::Cpp, "  \t  \n\u{a0}x\n"),
            (Language::JavaScript, "const s = `a\n  b`;   // tail\n"),
            (Language::JavaScript, "if (a&&b) { return '<div>' + \"&amp;\" }"),
            (Language::JavaScript, "/* never closed\nlet x = 1;"),
        ]
    }

    fn allowed_class(class: &str) -> bool {
        matches!(
            class,
            "comment" | "string" | "preprocessor" | "number" | "keyword" | "built-in"
        )
    }

    /// Every element in highlighted output must be one of our own spans,
    /// directly under the top level, with nothing but text inside.
    fn assert_only_spans(nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(_) => {}
                Node::Element(Element {
                    name,
                    attributes,
                    children,
                }) => {
                    assert_eq!(name, "span");
                    assert_eq!(attributes.len(), 1);
                    assert_eq!(attributes[0].name, "class");
                    assert!(allowed_class(
                        attributes[0]
                            .value
                            .as_deref()
                            .unwrap_or("")
                    ));
                    assert!(children
                        .iter()
                        .all(|child| matches!(child, Node::Text(_))));
                }
                other => panic!("unexpected node {:?}", other),
            }
        }
    }

    fn text_of(nodes: &[Node]) -> String {
        let mut wrapper = Element::new("code");
        wrapper.children = nodes.to_vec();
        wrapper.text_content()
    }

    #[test]
    fn output_is_safe_html() {
        for (language, code) in corpus() {
            let html = highlight(code, language.profile());
            let nodes = parse_fragment(&html).unwrap();

            assert_only_spans(&nodes);
        }
    }

    #[test]
    fn text_survives_exactly() {
        for (language, code) in corpus() {
            let html = highlight(code, language.profile());
            let nodes = parse_fragment(&html).unwrap();

            assert_eq!(text_of(&nodes), code, "text changed for {:?}", code);
        }
    }

    #[test]
    fn whitespace_is_preserved() {
        for (language, code) in corpus() {
            let html = highlight(code, language.profile());
            let nodes = parse_fragment(&html).unwrap();

            let expected: String = code
                .chars()
                .filter(|c| c.is_whitespace())
                .collect();
            let actual: String = text_of(&nodes)
                .chars()
                .filter(|c| c.is_whitespace())
                .collect();

            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn spans_never_overlap() {
        for (language, code) in corpus() {
            let escaped = escape(code);
            let spans = resolve(scan(&escaped, language.profile()));

            for pair in spans.windows(2) {
                assert!(pair[0].start < pair[0].end);
                assert!(pair[0].end <= pair[1].start);
            }
            for span in &spans {
                assert!(!escaped.splits_entity(span.start));
                assert!(!escaped.splits_entity(span.end));
            }

            let total: usize = fragments(escaped.as_str(), &spans)
                .iter()
                .map(|(_, content)| content.len())
                .sum();
            assert_eq!(total, escaped.len());
        }
    }

    #[test]
    fn identity_renders_escaped_text() {
        for (language, code) in corpus() {
            let result = highlight_with(&Identity, code, language.profile());
            assert_eq!(result, escape(code).into_string());
        }
    }

    #[test]
    fn terminal_renders_raw_text() {
        for (language, code) in corpus() {
            let result = highlight_with(&Terminal, code, language.profile());
            let stripped = strip_ansi(&result);
            assert_eq!(stripped, code);
        }
    }

    fn strip_ansi(text: &str) -> String {
        let mut result = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                // CSI sequences end with a letter
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }
}
