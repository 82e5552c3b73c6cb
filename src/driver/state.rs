use crate::driver::Config;
use crate::language::Language;
use crate::markup::Element;

/// Whether a block has been highlighted, and as what. Kept on the element
/// itself (the marker class and a `data-language` attribute) so that it
/// survives writing the page out and reading it back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeBlockState {
    pub highlighted: bool,
    pub language: Option<Language>,
}

impl CodeBlockState {
    pub fn read(element: &Element, config: &Config) -> CodeBlockState {
        CodeBlockState {
            highlighted: element.has_class(&config.marker_class),
            language: element
                .attribute("data-language")
                .and_then(Language::from_key),
        }
    }

    pub fn write(&self, element: &mut Element, config: &Config) {
        if self.highlighted {
            element.add_class(&config.marker_class);
        }
        if let Some(language) = self.language {
            element.set_attribute("data-language", language.key());
        }
    }
}
