#[cfg(test)]
mod verify {
    use std::fs;
    use std::path::{Path, PathBuf};

    use highlighter::driver::Highlighter;
    use highlighter::markup::{self, parse_document, Node};

    fn sample_files() -> Vec<PathBuf> {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("html")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .html files found in samples directory");
        files.sort();
        files
    }

    /// Highlighted blocks may only contain text and our own spans.
    fn check_blocks(nodes: &[Node], file: &Path) {
        for node in nodes {
            if let Node::Element(element) = node {
                if element.name == "code" && element.has_class("highlighted") {
                    for child in &element.children {
                        match child {
                            Node::Text(_) => {}
                            Node::Element(span) if span.name == "span" => {}
                            other => {
                                panic!("{:?}: unexpected {:?} in highlighted block", file, other)
                            }
                        }
                    }
                } else {
                    check_blocks(&element.children, file);
                }
            }
        }
    }

    #[test]
    fn samples_highlight_once() {
        let highlighter = Highlighter::default();

        for file in sample_files() {
            let content = markup::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let mut document = parse_document(&content)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));

            let summary = highlighter.highlight_all(&mut document);
            assert!(summary.highlighted > 0, "{:?}: nothing highlighted", file);
            assert_eq!(summary.failed, 0);

            check_blocks(&document.nodes, &file);

            let once = document.to_html();

            let mut again = parse_document(&once).unwrap();
            let summary = highlighter.highlight_all(&mut again);
            assert_eq!(summary.highlighted, 0, "{:?}: highlighted twice", file);

            if again.to_html() != once {
                panic!("{:?}: output changed on the second pass", file);
            }
        }
    }
}
