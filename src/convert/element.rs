//! Read-only element view handed to converters.

use super::environment::Output;
use crate::dom::{self, ArenaDom, ArenaNodeData, ArenaNodeId, TextMode};

/// Conversion state of one arena node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    Pending,
    Resolved(Output),
}

/// A node of the document as seen during conversion.
///
/// Gives access to the node's markup, its relatives and the output of
/// already converted descendants. Elements report their tag name; other nodes
/// report `#text`, `#comment`, `#doctype` or `#document`.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    dom: &'a ArenaDom,
    slots: &'a [Slot],
    id: ArenaNodeId,
}

impl<'a> Element<'a> {
    pub(crate) fn new(dom: &'a ArenaDom, slots: &'a [Slot], id: ArenaNodeId) -> Self {
        Self { dom, slots, id }
    }

    fn at(&self, id: ArenaNodeId) -> Element<'a> {
        Element::new(self.dom, self.slots, id)
    }

    pub fn id(&self) -> ArenaNodeId {
        self.id
    }

    pub fn dom(&self) -> &'a ArenaDom {
        self.dom
    }

    pub fn tag_name(&self) -> &'a str {
        match self.dom.get(self.id).map(|n| &n.data) {
            Some(ArenaNodeData::Element { name, .. }) => name.local.as_ref(),
            Some(ArenaNodeData::Text(_)) => "#text",
            Some(ArenaNodeData::Comment(_)) => "#comment",
            Some(ArenaNodeData::Doctype { .. }) => "#doctype",
            Some(ArenaNodeData::Document) | None => "#document",
        }
    }

    pub fn is_element(&self) -> bool {
        self.dom.is_element(self.id)
    }

    /// Text of a text or comment node.
    pub fn text(&self) -> Option<&'a str> {
        match self.dom.get(self.id).map(|n| &n.data) {
            Some(ArenaNodeData::Text(s) | ArenaNodeData::Comment(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.dom.get_attr(self.id, name)
    }

    pub fn classes(&self) -> &'a [String] {
        self.dom.element_classes(self.id)
    }

    pub fn parent(&self) -> Option<Element<'a>> {
        self.dom.parent(self.id).map(|id| self.at(id))
    }

    pub fn next_sibling(&self) -> Option<Element<'a>> {
        self.dom.next_sibling(self.id).map(|id| self.at(id))
    }

    pub fn prev_sibling(&self) -> Option<Element<'a>> {
        self.dom.prev_sibling(self.id).map(|id| self.at(id))
    }

    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        let (dom, slots) = (self.dom, self.slots);
        dom.children(self.id)
            .map(move |id| Element::new(dom, slots, id))
    }

    /// Whether any ancestor is one of `tags`.
    pub fn is_descendant_of(&self, tags: &[&str]) -> bool {
        self.dom.has_ancestor(self.id, tags)
    }

    /// The converted output of this node, once resolved.
    pub fn output(&self) -> Option<&'a Output> {
        match self.slots.get(self.id.index()) {
            Some(Slot::Resolved(output)) => Some(output),
            _ => None,
        }
    }

    /// Converted content: the outputs of all children, in order.
    ///
    /// Block outputs are set off by a blank line on both sides. Inside a list
    /// item a nested list follows the item text on the next line instead.
    pub fn value(&self) -> String {
        let in_list_item = self.tag_name() == "li";
        let mut value = String::new();

        for child in self.children() {
            match child.output() {
                Some(Output::Inline(text)) => value.push_str(text),
                Some(Output::Block(text)) => {
                    let kept = value.trim_end_matches(' ').len();
                    value.truncate(kept);
                    if in_list_item && matches!(child.tag_name(), "ul" | "ol") {
                        if !value.is_empty() && !value.ends_with('\n') {
                            value.push('\n');
                        }
                        value.push_str(text);
                        value.push('\n');
                    } else {
                        if !value.is_empty() {
                            let newlines = value.len() - value.trim_end_matches('\n').len();
                            for _ in newlines..2 {
                                value.push('\n');
                            }
                        }
                        value.push_str(text);
                        value.push_str("\n\n");
                    }
                }
                Some(Output::Delete) | None => {}
            }
        }

        value
    }

    /// Concatenated text of all descendants, as decoded by the parser.
    pub fn text_content(&self) -> String {
        self.dom.descendant_text(self.id)
    }

    /// Markup of the children.
    pub fn inner_html(&self, mode: TextMode) -> String {
        dom::inner_html(self.dom, self.id, mode)
    }

    /// Markup of the node itself.
    pub fn outer_html(&self, mode: TextMode) -> String {
        dom::outer_html(self.dom, self.id, mode)
    }

    pub fn open_tag(&self) -> String {
        dom::open_tag(self.dom, self.id)
    }

    pub fn close_tag(&self) -> String {
        dom::close_tag(self.dom, self.id)
    }

    /// Language named by a `language-*` class.
    pub fn language(&self) -> Option<&'a str> {
        self.classes()
            .iter()
            .find_map(|class| class.strip_prefix("language-"))
            .filter(|lang| !lang.is_empty())
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn resolve_children(dom: &ArenaDom, parent: ArenaNodeId, outputs: Vec<Output>) -> Vec<Slot> {
        let mut slots = vec![Slot::Pending; dom.len()];
        for (child, output) in dom.children(parent).zip(outputs) {
            slots[child.index()] = Slot::Resolved(output);
        }
        slots
    }

    #[test]
    fn test_relatives() {
        let parsed = parse_html("<blockquote><p class=\"a language-rust\">x</p><hr></blockquote>");
        let dom = &parsed.dom;
        let slots = vec![Slot::Pending; dom.len()];
        let p = Element::new(dom, &slots, dom.find_by_tag("p").unwrap());

        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.parent().unwrap().tag_name(), "blockquote");
        assert_eq!(p.next_sibling().unwrap().tag_name(), "hr");
        assert!(p.prev_sibling().is_none());
        assert!(p.is_descendant_of(&["blockquote"]));
        assert_eq!(p.language(), Some("rust"));
        assert_eq!(p.children().next().unwrap().tag_name(), "#text");
        assert_eq!(p.text_content(), "x");
        assert!(p.output().is_none());
    }

    #[test]
    fn test_value_separates_blocks() {
        let parsed = parse_html("<div>a<p>b</p>c </div>");
        let dom = &parsed.dom;
        let div = dom.find_by_tag("div").unwrap();
        let slots = resolve_children(
            dom,
            div,
            vec![
                Output::Inline("a ".into()),
                Output::Block("b".into()),
                Output::Inline("c ".into()),
            ],
        );
        assert_eq!(Element::new(dom, &slots, div).value(), "a\n\nb\n\nc ");
    }

    #[test]
    fn test_value_skips_deleted() {
        let parsed = parse_html("<p>a<b>b</b>c</p>");
        let dom = &parsed.dom;
        let p = dom.find_by_tag("p").unwrap();
        let slots = resolve_children(
            dom,
            p,
            vec![
                Output::Inline("a".into()),
                Output::Delete,
                Output::Inline("c".into()),
            ],
        );
        assert_eq!(Element::new(dom, &slots, p).value(), "ac");
    }

    #[test]
    fn test_nested_list_attaches_to_item() {
        let parsed = parse_html("<ul><li>item<ul><li>x</li></ul></li></ul>");
        let dom = &parsed.dom;
        let li = dom.find_by_tag("li").unwrap();
        let slots = resolve_children(
            dom,
            li,
            vec![Output::Inline("item".into()), Output::Block("- x".into())],
        );
        assert_eq!(Element::new(dom, &slots, li).value(), "item\n- x\n");
    }
}
