//! html5ever TreeSink implementation for ArenaDom.

use std::borrow::Cow;
use std::cell::{Ref, RefCell};

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute};

/// Handle used by TreeSink to reference nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(pub ArenaNodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(ArenaNodeId::NONE)
    }
}

/// TreeSink implementation that builds an ArenaDom.
///
/// Uses interior mutability (RefCell) because html5ever's TreeSink trait
/// requires methods to take `&self` but we need to mutate the DOM.
pub struct ArenaSink {
    dom: RefCell<ArenaDom>,
    errors: RefCell<Vec<Cow<'static, str>>>,
    quirks_mode: RefCell<QuirksMode>,
}

impl Default for ArenaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaSink {
    pub fn new() -> Self {
        Self {
            dom: RefCell::new(ArenaDom::new()),
            errors: RefCell::new(Vec::new()),
            quirks_mode: RefCell::new(QuirksMode::NoQuirks),
        }
    }

    /// Consume the sink and return the DOM.
    pub fn into_dom(self) -> ArenaDom {
        self.dom.into_inner()
    }

    /// Consume the sink, returning the DOM and every recovered parse error.
    pub fn into_parts(self) -> (ArenaDom, Vec<Cow<'static, str>>) {
        (self.dom.into_inner(), self.errors.into_inner())
    }
}

impl TreeSink for ArenaSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = Ref<'a, QualName>
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        // Recovery is the parser's job; the message is only kept for reporting.
        self.errors.borrow_mut().push(msg);
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.dom.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        // The guard keeps the arena borrowed while html5ever inspects the name,
        // so a reallocating insert cannot happen underneath it.
        Ref::map(self.dom.borrow(), |dom| match dom.get(target.0).map(|n| &n.data) {
            Some(ArenaNodeData::Element { name, .. }) => name,
            _ => &EMPTY,
        })
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let converted_attrs: Vec<Attribute> = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();

        let id = self.dom.borrow_mut().create_element(name, converted_attrs);
        NodeHandle(id)
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        let id = self.dom.borrow_mut().create_comment(text.to_string());
        NodeHandle(id)
    }

    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Self::Handle {
        // Processing instructions only occur in foreign content; keep them as comments.
        let text = format!("?{target} {data}?");
        NodeHandle(self.dom.borrow_mut().create_comment(text))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut dom = self.dom.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => {
                dom.append(parent.0, node.0);
            }
            NodeOrText::AppendText(text) => {
                dom.append_text(parent.0, &text);
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.dom.borrow().parent(element.0);
        match parent {
            Some(parent) => self.append(&NodeHandle(parent), child),
            None => self.append(prev_element, child),
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        let mut dom = self.dom.borrow_mut();
        let doc = dom.document();
        let doctype = dom.create_doctype(name.to_string());
        dom.append(doc, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents stay inline; they are passed through like any unknown tag.
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        *self.quirks_mode.borrow_mut() = mode;
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut dom = self.dom.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => {
                dom.insert_before(sibling.0, node.0);
            }
            NodeOrText::AppendText(text) => {
                let text_node = dom.create_text(text.to_string());
                dom.insert_before(sibling.0, text_node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut dom = self.dom.borrow_mut();
        if let Some(node) = dom.get_mut(target.0)
            && let ArenaNodeData::Element {
                attrs: existing, ..
            } = &mut node.data
        {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.dom.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let mut dom = self.dom.borrow_mut();
        let children: Vec<_> = dom.children(node.0).collect();
        for child in children {
            dom.detach(child);
            dom.append(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    #[test]
    fn test_basic_parse() {
        let parsed = parse_html("<html><body><p>Hello</p></body></html>");
        let dom = &parsed.dom;

        assert!(dom.len() > 3);
        assert!(dom.root_element().is_some());

        let p = dom.find_by_tag("p").expect("should find p");
        let text_id = dom.children(p).next().expect("p should have child");
        assert_eq!(dom.text_content(text_id), Some("Hello"));
    }

    #[test]
    fn test_fragment_gets_wrappers() {
        let parsed = parse_html("just text");
        let dom = &parsed.dom;

        let html = dom.root_element().expect("html element synthesized");
        let tags: Vec<_> = dom.children(html).filter_map(|c| dom.tag_name(c)).collect();
        assert_eq!(tags, vec!["head", "body"]);
    }

    #[test]
    fn test_entities_decoded() {
        let parsed = parse_html("<p>&lt;b&gt; &amp;euro;</p>");
        let p = parsed.dom.find_by_tag("p").unwrap();
        assert_eq!(parsed.dom.descendant_text(p), "<b> &euro;");
    }

    #[test]
    fn test_misnested_tags_recovered() {
        // The reopened <b> is reconstructed inside the second paragraph.
        let parsed = parse_html("<p><b>one<p>two</b> three</p>");
        let dom = &parsed.dom;

        let body = dom.find_by_tag("body").unwrap();
        assert_eq!(dom.descendant_text(body), "onetwo three");
        assert!(!parsed.errors.is_empty());
    }

    #[test]
    fn test_foreign_content_parses() {
        let parsed = parse_html(
            "<p><svg><foreignObject><b>x</b></foreignObject></svg><math><mi>y</mi></math></p>",
        );
        let dom = &parsed.dom;

        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(dom.descendant_text(p), "xy");
        assert!(dom.find_by_tag("foreignObject").is_some());
    }
}
