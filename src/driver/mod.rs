//! Finding code blocks in a page and highlighting each of them once.
//!
//! A block is a `code` element somewhere inside a `pre`, somewhere inside
//! an element carrying the container class, or carrying its own `data-lang`
//! attribute. Once a
//! block has been highlighted it is marked, and every later pass leaves it
//! alone; running the driver again, whether because the page was loaded or
//! because content was added to it, is always safe.

use std::fmt;
use tracing::{debug, warn};

use crate::highlighting::highlight;
use crate::language::Language;
use crate::markup::{parse_fragment, Document, Element, Node};

mod extract;
mod state;

pub use extract::extract_text;
pub use state::CodeBlockState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language used when a block names none, or names one we do not know.
    pub fallback: Language,
    /// Class marking an element that wraps a code block.
    pub container_class: String,
    /// Class added to a block once it has been highlighted.
    pub marker_class: String,
    /// Record the resolved language on the wrapping container as `data-lang`.
    pub annotate_container: bool,
    /// Give highlighted blocks an `aria-label` naming their language.
    pub label: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fallback: Language::Python,
            container_class: "code-block".to_string(),
            marker_class: "highlighted".to_string(),
            annotate_container: true,
            label: false,
        }
    }
}

/// Lifecycle events from whatever hosts the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The document has finished loading.
    Ready,
    /// Part of the document changed; `added` counts inserted nodes.
    Mutated { added: usize },
}

/// What one pass over a document did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub highlighted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} highlighted, {} already done, {} failed",
            self.highlighted, self.skipped, self.failed
        )
    }
}

enum Outcome {
    Highlighted(Language),
    Skipped,
    Failed,
}

/// What a block needs to know about the elements it sits in.
#[derive(Debug, Default)]
struct Context {
    /// Some ancestor is a `pre` or carries the container class.
    container: bool,
    /// The `language-*` class of the direct parent.
    language: Option<String>,
}

/// The block driver. Construct one for a page and call `highlight_all()`
/// whenever the page might contain new code blocks.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: Config,
}

impl Highlighter {
    pub fn new(config: Config) -> Highlighter {
        Highlighter { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Highlight every eligible block in the document that has not been
    /// highlighted yet.
    pub fn highlight_all(&self, document: &mut Document) -> Summary {
        let mut summary = Summary::default();

        self.visit(&mut document.nodes, &Context::default(), &mut summary);

        debug!("{}", summary);
        summary
    }

    /// As `highlight_all()`, but only within one subtree. The root itself
    /// counts as a block if it is one in its own right.
    pub fn highlight_element(&self, root: &mut Element) -> Summary {
        let mut summary = Summary::default();
        let top = Context::default();

        if self.is_block(root, &top) {
            self.tally(self.highlight_block(root, &top), &mut summary);
        } else {
            let context = self.context_of(root, &top);
            if let Some(language) = self.visit(&mut root.children, &context, &mut summary) {
                self.annotate(root, language);
            }
        }

        debug!("{}", summary);
        summary
    }

    /// Respond to a lifecycle event. Loading, and any change that added
    /// nodes, both lead to a full pass; already highlighted blocks are
    /// skipped so the pass only touches new ones.
    pub fn notify(&self, signal: Signal, document: &mut Document) -> Summary {
        match signal {
            Signal::Mutated { added: 0 } => Summary::default(),
            Signal::Ready | Signal::Mutated { .. } => self.highlight_all(document),
        }
    }

    /// Walk a list of sibling nodes. Returns the language of the last block
    /// highlighted directly among them, so the caller can annotate the
    /// container.
    fn visit(
        &self,
        nodes: &mut [Node],
        context: &Context,
        summary: &mut Summary,
    ) -> Option<Language> {
        let mut resolved = None;

        for node in nodes.iter_mut() {
            let Node::Element(element) = node else {
                continue;
            };

            if self.is_block(element, context) {
                let outcome = self.highlight_block(element, context);
                if let Some(language) = self.tally(outcome, summary) {
                    resolved = Some(language);
                }
                continue;
            }

            if element.is_raw_text() {
                continue;
            }

            let inner = self.context_of(element, context);
            if let Some(language) = self.visit(&mut element.children, &inner, summary) {
                self.annotate(element, language);
            }
        }

        resolved
    }

    fn tally(&self, outcome: Outcome, summary: &mut Summary) -> Option<Language> {
        match outcome {
            Outcome::Highlighted(language) => {
                summary.highlighted += 1;
                Some(language)
            }
            Outcome::Skipped => {
                summary.skipped += 1;
                None
            }
            Outcome::Failed => {
                summary.failed += 1;
                None
            }
        }
    }

    fn is_block(&self, element: &Element, context: &Context) -> bool {
        element.name == "code" && (context.container || element.attribute("data-lang").is_some())
    }

    fn context_of(&self, element: &Element, outer: &Context) -> Context {
        Context {
            container: outer.container
                || element.name == "pre"
                || element.has_class(&self.config.container_class),
            language: language_class(element),
        }
    }

    fn annotate(&self, container: &mut Element, language: Language) {
        if self.config.annotate_container && container.has_class(&self.config.container_class) {
            container.set_attribute("data-lang", language.key());
        }
    }

    /// The language for a block: its `data-lang` attribute, else a
    /// `language-*` class on it, else one on its parent, else the fallback.
    /// A key we do not recognize also gets the fallback.
    pub fn resolve_language(&self, block: &Element, parent: Option<&Element>) -> Language {
        let context = match parent {
            Some(parent) => self.context_of(parent, &Context::default()),
            None => Context::default(),
        };
        self.language_for(block, &context)
    }

    fn language_for(&self, block: &Element, context: &Context) -> Language {
        let key = block
            .attribute("data-lang")
            .map(str::to_string)
            .filter(|key| {
                !key.trim()
                    .is_empty()
            })
            .or_else(|| language_class(block))
            .or_else(|| {
                context
                    .language
                    .clone()
            });

        match key {
            Some(key) => match Language::from_key(&key) {
                Some(language) => language,
                None => {
                    debug!(%key, fallback = %self.config.fallback, "unrecognized language");
                    self.config.fallback
                }
            },
            None => self.config.fallback,
        }
    }

    fn highlight_block(&self, block: &mut Element, context: &Context) -> Outcome {
        if CodeBlockState::read(block, &self.config).highlighted {
            return Outcome::Skipped;
        }

        let language = self.language_for(block, context);
        let code = extract_text(block);
        let html = highlight(&code, language.profile());

        match parse_fragment(&html) {
            Ok(children) => block.children = children,
            Err(error) => {
                warn!(%error, "highlighted block could not be read back");
                return Outcome::Failed;
            }
        }

        let state = CodeBlockState {
            highlighted: true,
            language: Some(language),
        };
        state.write(block, &self.config);

        if self.config.label {
            block.set_attribute("aria-label", &format!("{} code", language.name()));
        }

        debug!(language = language.key(), bytes = code.len(), "highlighted block");
        Outcome::Highlighted(language)
    }
}

/// The key from a `language-<key>` class, if the element has one.
fn language_class(element: &Element) -> Option<String> {
    let pattern = crate::regex!(r"^language-(.+)$");

    element
        .classes()
        .find_map(|class| {
            pattern
                .captures(class)
                .map(|captures| captures[1].to_string())
        })
}
