//! `em`, `i`, `strong` and `b`.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct EmphasisConverter;

impl Converter for EmphasisConverter {
    fn tags(&self) -> &[&'static str] {
        &["em", "i", "strong", "b"]
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        let value = element.value();
        let content = value.trim();
        if content.is_empty() {
            // Whitespace only: no markers.
            return Output::Inline(value);
        }

        let marker = match element.tag_name() {
            "strong" | "b" => config.bold_style.as_str(),
            _ => config.italic_style.as_str(),
        };
        let prefix = if value.starts_with(char::is_whitespace) { " " } else { "" };
        let suffix = if value.ends_with(char::is_whitespace) { " " } else { "" };

        Output::Inline(format!("{prefix}{marker}{content}{marker}{suffix}"))
    }
}
