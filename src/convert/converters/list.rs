//! `ul`, `ol` and `li`.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListConverter;

impl Converter for ListConverter {
    fn tags(&self) -> &[&'static str] {
        &["ul", "ol"]
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        let ordered = element.tag_name() == "ol";
        let start: u64 = element
            .attr("start")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);
        let bullet = match config.list_item_style_alternate {
            Some(alternate) if !ordered && preceding_lists(element) % 2 == 1 => alternate,
            _ => config.list_item_style,
        };

        let mut lines = Vec::new();
        let mut number = start;
        for child in element.children() {
            let Some(text) = child.output().and_then(Output::text) else {
                continue;
            };
            if child.tag_name() == "li" {
                let marker = if ordered {
                    let marker = format!("{number}.");
                    number = number.saturating_add(1);
                    marker
                } else {
                    bullet.to_string()
                };
                lines.push(format_item(&marker, text));
            } else if !text.trim().is_empty() {
                lines.push(text.trim().to_string());
            }
        }

        if lines.is_empty() {
            return Output::Delete;
        }
        Output::Block(lines.join("\n"))
    }
}

/// Content of a list item; the enclosing list adds the marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListItemConverter;

impl Converter for ListItemConverter {
    fn tags(&self) -> &[&'static str] {
        &["li"]
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        Output::Inline(element.value().trim().to_string())
    }
}

/// Prefix the first line with the marker and indent the rest under it.
fn format_item(marker: &str, content: &str) -> String {
    let indent = " ".repeat(marker.chars().count() + 1);
    let mut item = String::with_capacity(content.len() + marker.len() + 1);
    for (i, line) in content.split('\n').enumerate() {
        if i == 0 {
            item.push_str(marker);
            if !line.is_empty() {
                item.push(' ');
                item.push_str(line);
            }
        } else {
            item.push('\n');
            if !line.is_empty() {
                item.push_str(&indent);
                item.push_str(line);
            }
        }
    }
    item
}

/// Number of `ul` siblings directly before this one.
fn preceding_lists(element: &Element<'_>) -> usize {
    let mut count = 0;
    let mut prev = element.prev_sibling();
    while let Some(sibling) = prev {
        match sibling.tag_name() {
            "ul" => count += 1,
            "#text" if sibling.text().is_some_and(|t| t.trim().is_empty()) => {}
            _ => break,
        }
        prev = sibling.prev_sibling();
    }
    count
}
