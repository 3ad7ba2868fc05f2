//! `img`.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageConverter;

impl Converter for ImageConverter {
    fn tags(&self) -> &[&'static str] {
        &["img"]
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        let src = element.attr("src").unwrap_or_default();
        let alt = escape_alt(element.attr("alt").unwrap_or_default());

        let markdown = match element.attr("title") {
            Some(title) => format!("![{alt}]({src} \"{title}\")"),
            None => format!("![{alt}]({src})"),
        };
        Output::Inline(markdown)
    }
}

fn escape_alt(alt: &str) -> String {
    let mut out = String::with_capacity(alt.len());
    for c in alt.chars() {
        if matches!(c, '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
