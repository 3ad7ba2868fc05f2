//! `p`, and `div` when markup is stripped.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

use super::PassthroughConverter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphConverter;

impl Converter for ParagraphConverter {
    fn tags(&self) -> &[&'static str] {
        &["p"]
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        paragraph(element)
    }
}

/// A `div` is re-emitted as HTML unless tags are stripped, in which case it
/// reads as a paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivConverter;

impl Converter for DivConverter {
    fn tags(&self) -> &[&'static str] {
        &["div"]
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        if config.strip_tags {
            paragraph(element)
        } else {
            PassthroughConverter.convert(element, config)
        }
    }
}

fn paragraph(element: &Element<'_>) -> Output {
    let value = element.value();
    let content = value.trim();
    if content.is_empty() {
        Output::Delete
    } else {
        Output::Block(content.to_string())
    }
}
