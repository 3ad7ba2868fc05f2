//! HTML to Markdown conversion engine.
//!
//! The document is reduced bottom-up: every node is resolved to an [`Output`]
//! once all of its children are, by the converter the [`Environment`] selects
//! for its tag. Text nodes are normalized and escaped here, exactly once.
//!
//! ```text
//! <p>Some <em>text</em></p>
//!
//!   "Some "  -> Inline("Some ")
//!   "text"   -> Inline("text")
//!   <em>     -> Inline("_text_")
//!   <p>      -> Block("Some _text_")
//! ```

pub mod converters;
mod element;
mod environment;

use tracing::{debug, trace, warn};

pub use element::Element;
pub use environment::{Converter, Environment, Output};

use self::element::Slot;
use crate::config::Config;
use crate::dom::tags::{is_block_tag, is_inline_tag, is_raw_text_tag};
use crate::dom::{self, ArenaDom, ArenaNodeData, ArenaNodeId, TextMode};
use crate::error::{Error, Result};
use crate::markdown::{EscapeContext, escape};
use crate::util::decode_html;

/// Converts HTML documents to Markdown.
///
/// # Examples
///
/// ```
/// use htmark::{Config, HtmlConverter};
///
/// let converter = HtmlConverter::new();
/// assert_eq!(converter.convert("<h3>Title</h3><p>Some <em>text</em></p>").unwrap(),
///            "### Title\n\nSome _text_");
///
/// let stripping = HtmlConverter::with_config(Config::default().with_strip_tags(true)).unwrap();
/// assert_eq!(stripping.convert("<span>Strip</span>").unwrap(), "Strip");
/// ```
#[derive(Debug, Clone)]
pub struct HtmlConverter {
    environment: Environment,
    config: Config,
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlConverter {
    /// A converter with the standard converters and default options.
    pub fn new() -> Self {
        Self {
            environment: Environment::with_defaults(),
            config: Config::default(),
        }
    }

    /// A converter with the standard converters and the given options.
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_environment(Environment::with_defaults(), config)
    }

    /// A converter with a custom converter set.
    pub fn with_environment(environment: Environment, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            environment,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable options; prefer [`Config::set_option`] for validated updates.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Convert an HTML document or fragment.
    pub fn convert(&self, html: &str) -> Result<String> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let parsed = dom::parse_html(html);
        if self.config.suppress_errors {
            debug!(errors = parsed.errors.len(), "parsed with recovered errors");
        } else {
            for error in &parsed.errors {
                warn!(%error, "HTML parse error");
            }
        }

        let mut dom = parsed.dom;
        self.convert_dom(&mut dom)
    }

    /// Convert raw bytes, sniffing the encoding from a BOM or a charset
    /// declaration.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String> {
        self.convert(&decode_html(bytes))
    }

    /// Convert an already parsed document.
    ///
    /// White-listed tags are flagged opaque on the tree before conversion.
    pub fn convert_dom(&self, dom: &mut ArenaDom) -> Result<String> {
        self.config.validate()?;

        if !self.config.white_tags.is_empty() {
            let flagged = dom.mark_opaque(|tag| self.config.is_white_tag(tag));
            trace!(flagged, "flagged white-listed elements");
        }

        let root = dom
            .root_element()
            .ok_or_else(|| Error::InvalidInput("document has no html element".to_string()))?;

        let slots = self.resolve_tree(dom, root);
        let markdown = match &slots[root.index()] {
            Slot::Resolved(output) => output
                .text()
                .unwrap_or_default()
                .trim_matches(['\n', '\r', '\0', '\x0B'])
                .to_string(),
            Slot::Pending => String::new(),
        };

        debug!(nodes = dom.len(), bytes = markdown.len(), "converted document");
        Ok(markdown)
    }

    /// Resolve every reachable node, children before parents.
    fn resolve_tree(&self, dom: &ArenaDom, root: ArenaNodeId) -> Vec<Slot> {
        let mut slots = vec![Slot::Pending; dom.len()];
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if !expanded && self.descends_into(dom, &slots, id) {
                stack.push((id, true));
                let children: Vec<_> = dom.children(id).collect();
                stack.extend(children.into_iter().rev().map(|child| (child, false)));
                continue;
            }

            let output = self.resolve(dom, &slots, id);
            debug_assert_eq!(slots[id.index()], Slot::Pending, "node resolved twice");
            slots[id.index()] = Slot::Resolved(output);
        }

        slots
    }

    fn descends_into(&self, dom: &ArenaDom, slots: &[Slot], id: ArenaNodeId) -> bool {
        let Some(tag) = dom.tag_name(id) else {
            return false;
        };
        if self.config.removes(tag) || dom.is_opaque(id) {
            return false;
        }
        let element = Element::new(dom, slots, id);
        !self
            .environment
            .select(&element)
            .consumes_subtree(&element, &self.config)
    }

    fn resolve(&self, dom: &ArenaDom, slots: &[Slot], id: ArenaNodeId) -> Output {
        let element = Element::new(dom, slots, id);
        let Some(node) = dom.get(id) else {
            return Output::Delete;
        };

        match &node.data {
            ArenaNodeData::Text(text) => self.resolve_text(&element, text),
            ArenaNodeData::Doctype { .. } | ArenaNodeData::Document => Output::Delete,
            ArenaNodeData::Comment(_) => self
                .environment
                .select(&element)
                .convert(&element, &self.config),
            ArenaNodeData::Element { name, .. } => {
                let tag = name.local.as_ref();
                if self.config.removes(tag) {
                    trace!(tag, "removed element");
                    return Output::Delete;
                }
                if node.opaque {
                    return Output::Inline(element.outer_html(TextMode::Escaped));
                }
                match tag {
                    "html" | "head" | "body" => resolve_wrapper(&element),
                    _ => self
                        .environment
                        .select(&element)
                        .convert(&element, &self.config),
                }
            }
        }
    }

    fn resolve_text(&self, element: &Element<'_>, raw: &str) -> Output {
        let parent = element.parent();
        let parent_tag = parent.map_or("", |p| p.tag_name());

        if is_raw_text_tag(parent_tag) {
            return Output::Inline(escape(raw, EscapeContext::verbatim()));
        }

        let mut text = collapse_whitespace(raw.trim_start_matches('\n'));
        if text.is_empty() {
            return Output::Delete;
        }

        let next = element.next_sibling();
        let prev = element.prev_sibling();

        if text == " " {
            let next_to_block = [next, prev]
                .into_iter()
                .flatten()
                .any(|sibling| is_block_tag(sibling.tag_name()));
            if next_to_block || (next.is_none() && !is_inline_tag(parent_tag)) {
                return Output::Delete;
            }
        }

        if next.is_some_and(|n| n.tag_name() == "br") {
            text.truncate(text.trim_end().len());
            if text.is_empty() {
                return Output::Delete;
            }
        }

        let ctx = EscapeContext {
            verbatim: false,
            markdown: !(parent_tag == "div" && !self.config.strip_tags),
            line_start: self.starts_line(element),
        };
        Output::Inline(escape(&text, ctx))
    }

    /// Whether text at `element` lands at the start of an output line.
    ///
    /// Inline parents whose markup is stripped are transparent: the question
    /// moves up to them.
    fn starts_line(&self, element: &Element<'_>) -> bool {
        let mut node = *element;
        loop {
            if !follows_line_break(&node) {
                return false;
            }
            let Some(parent) = node.parent() else {
                return true;
            };
            if !is_inline_tag(parent.tag_name()) {
                return true;
            }
            if !(self.config.strip_tags && self.environment.passes_through(&parent)) {
                return false;
            }
            node = parent;
        }
    }
}

/// `html`, `head` and `body` contribute only their content.
fn resolve_wrapper(element: &Element<'_>) -> Output {
    let value = element.value();
    if element.tag_name() == "html" {
        return Output::Inline(value);
    }
    let content = value.trim_matches('\n');
    if content.is_empty() {
        Output::Delete
    } else {
        Output::Block(content.to_string())
    }
}

/// Whether the closest preceding sibling with output ended a line.
fn follows_line_break(element: &Element<'_>) -> bool {
    let mut prev = element.prev_sibling();
    while let Some(sibling) = prev {
        match sibling.output() {
            Some(Output::Block(_)) => return true,
            Some(Output::Inline(text)) if !text.is_empty() => return text.ends_with('\n'),
            _ => prev = sibling.prev_sibling(),
        }
    }
    true
}

/// Collapse every run of ASCII whitespace to a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a \n\t b"), "a b");
        assert_eq!(collapse_whitespace("\n\n"), " ");
        assert_eq!(collapse_whitespace("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");
    }

    #[test]
    fn test_empty_input() {
        let converter = HtmlConverter::new();
        assert_eq!(converter.convert("").unwrap(), "");
        assert_eq!(converter.convert("     ").unwrap(), "");
    }

    #[test]
    fn test_plain_text() {
        let converter = HtmlConverter::new();
        assert_eq!(converter.convert("test").unwrap(), "test");
        assert_eq!(converter.convert("test\nanother line").unwrap(), "test another line");
    }

    #[test]
    fn test_dom_without_root_is_invalid() {
        let converter = HtmlConverter::new();
        let mut dom = ArenaDom::new();
        assert!(matches!(
            converter.convert_dom(&mut dom),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_convert_dom_marks_white_tags() {
        let converter =
            HtmlConverter::with_config(Config::default().with_white_tags(["iframe"])).unwrap();
        let mut dom = parse_html(r#"<p>a</p><iframe src="x"></iframe>"#).dom;
        let markdown = converter.convert_dom(&mut dom).unwrap();
        assert_eq!(markdown, "a\n\n<iframe src=\"x\"></iframe>");
        assert!(dom.is_opaque(dom.find_by_tag("iframe").unwrap()));
    }

    #[test]
    fn test_every_reachable_node_resolved_once() {
        let converter = HtmlConverter::new();
        let parsed = parse_html("<ul><li>a<em>b</em></li></ul><pre><code>x</code></pre>");
        let root = parsed.dom.root_element().unwrap();
        let slots = converter.resolve_tree(&parsed.dom, root);

        let code = parsed.dom.find_by_tag("code").unwrap();
        let em = parsed.dom.find_by_tag("em").unwrap();
        assert_eq!(slots[code.index()], Slot::Pending);
        assert!(matches!(slots[em.index()], Slot::Resolved(_)));
        assert!(matches!(slots[root.index()], Slot::Resolved(_)));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 20_000;
        let html = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let markdown = HtmlConverter::with_config(Config::default().with_strip_tags(true))
            .unwrap()
            .convert(&html)
            .unwrap();
        assert_eq!(markdown, "x");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config::default().with_italic_style("");
        assert!(HtmlConverter::with_config(config).is_err());

        let mut converter = HtmlConverter::new();
        converter.config_mut().bold_style.clear();
        assert!(converter.convert("<b>x</b>").is_err());
    }
}
