//! `a` with a destination.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

/// Schemes whose URLs may be written as `<autolinks>`.
const AUTOLINK_SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkConverter;

impl Converter for LinkConverter {
    fn tags(&self) -> &[&'static str] {
        &["a"]
    }

    /// Anchors without an `href` are placeholders and stay HTML.
    fn accepts(&self, element: &Element<'_>) -> bool {
        element.attr("href").is_some_and(|href| !href.is_empty())
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        let href = element.attr("href").unwrap_or_default();
        let value = element.value();
        let text = value.trim_matches(['\t', '\n', '\r', '\0', '\x0B']);

        if let Some(title) = element.attr("title") {
            return Output::Inline(format!("[{text}]({href} \"{title}\")"));
        }

        let plain = element.text_content();
        let plain = plain.trim();

        if plain == href && AUTOLINK_SCHEMES.iter().any(|s| href.starts_with(s)) {
            return Output::Inline(format!("<{href}>"));
        }

        if href.strip_prefix("mailto:") == Some(plain) && is_email(plain) {
            return Output::Inline(format!("<{plain}>"));
        }

        let destination = if href.contains(' ') {
            format!("<{href}>")
        } else {
            href.to_string()
        };
        Output::Inline(format!("[{text}]({destination})"))
    }
}

fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !text.chars().any(|c| c.is_whitespace() || matches!(c, '<' | '>'))
}
