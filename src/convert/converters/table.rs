//! `table`, kept as HTML.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};
use crate::dom::TextMode;

#[derive(Debug, Clone, Copy, Default)]
pub struct TableConverter;

impl Converter for TableConverter {
    fn tags(&self) -> &[&'static str] {
        &["table"]
    }

    fn consumes_subtree(&self, _element: &Element<'_>, config: &Config) -> bool {
        !config.strip_tags
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        if config.strip_tags {
            // Cells were converted and stripped like any other markup.
            let value = element.value();
            let content = value.trim();
            return if content.is_empty() {
                Output::Delete
            } else {
                Output::Block(content.to_string())
            };
        }
        Output::Block(element.outer_html(TextMode::Escaped))
    }
}
