//! Re-serialization of arena subtrees as HTML markup.
//!
//! Used wherever a subtree is emitted verbatim instead of converted: tables,
//! white-listed tags, code content and passthrough open/close tags.

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};
use super::tags::{is_raw_text_tag, is_void_tag};

/// How text nodes are written during serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// `&`, `<` and `>` are written as entities.
    Escaped,
    /// Text is written as decoded by the parser.
    Raw,
}

enum Step {
    Enter(ArenaNodeId),
    Leave(ArenaNodeId),
}

/// Serialize a node including its own tags.
pub fn outer_html(dom: &ArenaDom, id: ArenaNodeId, mode: TextMode) -> String {
    let mut out = String::new();
    write_subtree(dom, id, mode, &mut out);
    out
}

/// Serialize the children of a node.
pub fn inner_html(dom: &ArenaDom, id: ArenaNodeId, mode: TextMode) -> String {
    let mut out = String::new();
    for child in dom.children(id) {
        write_subtree(dom, child, mode, &mut out);
    }
    out
}

/// The opening tag of an element, attributes in source order.
pub fn open_tag(dom: &ArenaDom, id: ArenaNodeId) -> String {
    let Some(tag) = dom.tag_name(id) else {
        return String::new();
    };
    let mut out = String::with_capacity(tag.len() + 2);
    out.push('<');
    out.push_str(tag);
    for attr in dom.attributes(id) {
        out.push(' ');
        out.push_str(attr.name.local.as_ref());
        out.push_str("=\"");
        out.push_str(&escape_attribute(&attr.value));
        out.push('"');
    }
    out.push('>');
    out
}

/// The closing tag of an element; empty for void elements.
pub fn close_tag(dom: &ArenaDom, id: ArenaNodeId) -> String {
    match dom.tag_name(id) {
        Some(tag) if !is_void_tag(tag) => format!("</{tag}>"),
        _ => String::new(),
    }
}

fn write_subtree(dom: &ArenaDom, root: ArenaNodeId, mode: TextMode, out: &mut String) {
    let mut stack = vec![Step::Enter(root)];

    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Leave(id) => {
                out.push_str(&close_tag(dom, id));
                continue;
            }
            Step::Enter(id) => id,
        };
        let Some(node) = dom.get(id) else { continue };

        match &node.data {
            ArenaNodeData::Element { .. } => {
                out.push_str(&open_tag(dom, id));
                stack.push(Step::Leave(id));
                let mut children: Vec<_> = dom.children(id).collect();
                children.reverse();
                stack.extend(children.into_iter().map(Step::Enter));
            }
            ArenaNodeData::Text(text) => {
                let raw_parent = dom
                    .parent(id)
                    .and_then(|p| dom.tag_name(p))
                    .is_some_and(is_raw_text_tag);
                if mode == TextMode::Raw || raw_parent {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_html(text));
                }
            }
            ArenaNodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            ArenaNodeData::Doctype { name } => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
            ArenaNodeData::Document => {
                let mut children: Vec<_> = dom.children(id).collect();
                children.reverse();
                stack.extend(children.into_iter().map(Step::Enter));
            }
        }
    }
}

/// Escape `&`, `<` and `>`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_outer_html_table() {
        let parsed = parse_html("<table><tr><td class=\"x\">a &amp; b</td></tr></table>");
        let table = parsed.dom.find_by_tag("table").unwrap();
        assert_eq!(
            outer_html(&parsed.dom, table, TextMode::Escaped),
            "<table><tbody><tr><td class=\"x\">a &amp; b</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_inner_html_raw() {
        let parsed = parse_html("<code>&lt;p&gt;x<b>y</b></code>");
        let code = parsed.dom.find_by_tag("code").unwrap();
        assert_eq!(inner_html(&parsed.dom, code, TextMode::Raw), "<p>x<b>y</b>");
        assert_eq!(
            inner_html(&parsed.dom, code, TextMode::Escaped),
            "&lt;p&gt;x<b>y</b>"
        );
    }

    #[test]
    fn test_void_elements_have_no_close_tag() {
        let parsed = parse_html("<p><img src=\"a.png\" alt='say \"hi\"'></p>");
        let img = parsed.dom.find_by_tag("img").unwrap();
        assert_eq!(
            open_tag(&parsed.dom, img),
            "<img src=\"a.png\" alt=\"say &quot;hi&quot;\">"
        );
        assert_eq!(close_tag(&parsed.dom, img), "");
    }

    #[test]
    fn test_script_text_never_escaped() {
        let parsed = parse_html("<div><script>if (a < b) {}</script></div>");
        let div = parsed.dom.find_by_tag("div").unwrap();
        assert_eq!(
            outer_html(&parsed.dom, div, TextMode::Escaped),
            "<div><script>if (a < b) {}</script></div>"
        );
    }

    #[test]
    fn test_comments_kept() {
        let parsed = parse_html("<div>a<!-- note -->b</div>");
        let div = parsed.dom.find_by_tag("div").unwrap();
        assert_eq!(
            inner_html(&parsed.dom, div, TextMode::Escaped),
            "a<!-- note -->b"
        );
    }
}
