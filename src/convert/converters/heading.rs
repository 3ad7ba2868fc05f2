//! `h1`–`h6`.

use crate::config::{Config, HeaderStyle};
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingConverter;

impl Converter for HeadingConverter {
    fn tags(&self) -> &[&'static str] {
        &["h1", "h2", "h3", "h4", "h5", "h6"]
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        let value = element.value();
        let content = value.trim();
        if content.is_empty() {
            return Output::Delete;
        }

        let level = heading_level(element.tag_name());
        let setext = level <= 2
            && config.header_style == HeaderStyle::Setext
            && !element.is_descendant_of(&["blockquote"]);

        if setext {
            let underline = if level == 1 { '=' } else { '-' };
            let width = content
                .lines()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            let rule: String = std::iter::repeat_n(underline, width).collect();
            Output::Block(format!("{content}\n{rule}"))
        } else {
            let line = content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Output::Block(format!("{} {line}", "#".repeat(level)))
        }
    }
}

fn heading_level(tag: &str) -> usize {
    tag.strip_prefix('h')
        .and_then(|n| n.parse().ok())
        .unwrap_or(1)
}
