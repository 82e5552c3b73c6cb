#[cfg(test)]
mod verify {
    use highlighter::highlighting::highlight;
    use highlighter::language::Language;
    use highlighter::markup::{parse_fragment, Node};

    /// The highlighted pieces of some code as (class, text) pairs.
    fn spans(language: Language, code: &str) -> Vec<(String, String)> {
        let html = highlight(code, language.profile());
        parse_fragment(&html)
            .unwrap()
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some((
                    element
                        .attribute("class")
                        .unwrap_or("")
                        .to_string(),
                    element.text_content(),
                )),
                _ => None,
            })
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(class, text)| (class.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn comment_hides_keyword() {
        assert_eq!(
            spans(Language::Python, "# return 1"),
            pairs(&[("comment", "# return 1")])
        );
    }

    #[test]
    fn string_hides_keyword() {
        assert_eq!(
            spans(Language::Python, r#"x = "def foo(): pass""#),
            pairs(&[("string", r#""def foo(): pass""#)])
        );
    }

    #[test]
    fn triple_quoted_strings() {
        assert_eq!(
            spans(Language::Python, r#""""a # not a comment""""#),
            pairs(&[("string", r#""""a # not a comment""""#)])
        );

        assert_eq!(
            spans(Language::Python, "'''doc \"quoted\"\n# still doc'''\nreturn"),
            pairs(&[
                ("string", "'''doc \"quoted\"\n# still doc'''"),
                ("keyword", "return")
            ])
        );
    }

    #[test]
    fn python_statements() {
        assert_eq!(
            spans(Language::Python, "for i in range(10):\n    total += 3.14 # add"),
            pairs(&[
                ("keyword", "for"),
                ("keyword", "in"),
                ("built-in", "range"),
                ("number", "10"),
                ("number", "3.14"),
                ("comment", "# add"),
            ])
        );
    }

    #[test]
    fn keywords_inside_identifiers() {
        assert_eq!(spans(Language::Python, "printer = interval_x"), pairs(&[]));
        assert_eq!(spans(Language::Cpp, "sprint(integer);"), pairs(&[]));
    }

    #[test]
    fn preprocessor_directives() {
        assert_eq!(
            spans(Language::Cpp, "#include <vector>\nint main(){}"),
            pairs(&[
                ("preprocessor", "#include <vector>"),
                ("keyword", "int")
            ])
        );
    }

    #[test]
    fn builtins_beat_keywords() {
        assert_eq!(
            spans(Language::Cpp, r#"printf("%d", sizeof(int));"#),
            pairs(&[
                ("built-in", "printf"),
                ("string", r#""%d""#),
                ("built-in", "sizeof"),
                ("keyword", "int"),
            ])
        );
    }

    #[test]
    fn block_comments_span_lines() {
        assert_eq!(
            spans(Language::Cpp, "/* int x = 1;\n */ float y = 2.5f;"),
            pairs(&[
                ("comment", "/* int x = 1;\n */"),
                ("keyword", "float"),
                ("number", "2.5f"),
            ])
        );
    }

    #[test]
    fn javascript_templates_and_comments() {
        assert_eq!(
            spans(Language::JavaScript, "// if (x) return\nreturn `t ${x}\nok`;"),
            pairs(&[
                ("comment", "// if (x) return"),
                ("keyword", "return"),
                ("string", "`t ${x}\nok`"),
            ])
        );

        assert_eq!(
            spans(Language::JavaScript, "console.log('it\\'s', null)"),
            pairs(&[
                ("built-in", "console"),
                ("string", "'it\\'s'"),
                ("keyword", "null"),
            ])
        );
    }

    #[test]
    fn markup_characters_inside_strings() {
        assert_eq!(
            spans(Language::JavaScript, r#"el.innerHTML = "<b>&</b>";"#),
            pairs(&[("string", r#""<b>&</b>""#)])
        );
    }
}
