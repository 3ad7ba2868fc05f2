//! Arena-based DOM for HTML parsing.
//!
//! html5ever parses into this tree; the converter then walks it by index.
//! Parent/child/sibling links are indices into one vector, so ancestor scans
//! never chase owning pointers.

use html5ever::{LocalName, QualName};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaNodeId(pub u32);

impl ArenaNodeId {
    /// Sentinel value for no node.
    pub const NONE: ArenaNodeId = ArenaNodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    /// Index into per-node side tables.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    fn into_option(self) -> Option<ArenaNodeId> {
        self.is_some().then_some(self)
    }
}

/// Node type in the arena DOM.
#[derive(Debug, Clone)]
pub enum ArenaNodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Pre-extracted classes for `language-*` lookups.
        classes: Vec<String>,
    },
    /// Text content, entities already decoded.
    Text(String),
    Comment(String),
    /// Document type declaration.
    Doctype { name: String },
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena DOM.
#[derive(Debug)]
pub struct ArenaNode {
    pub data: ArenaNodeData,
    pub parent: ArenaNodeId,
    pub first_child: ArenaNodeId,
    pub last_child: ArenaNodeId,
    pub prev_sibling: ArenaNodeId,
    pub next_sibling: ArenaNodeId,
    /// Set on subtrees that must be re-emitted as markup, never converted.
    pub opaque: bool,
}

impl ArenaNode {
    fn new(data: ArenaNodeData) -> Self {
        Self {
            data,
            parent: ArenaNodeId::NONE,
            first_child: ArenaNodeId::NONE,
            last_child: ArenaNodeId::NONE,
            prev_sibling: ArenaNodeId::NONE,
            next_sibling: ArenaNodeId::NONE,
            opaque: false,
        }
    }
}

/// Arena-based DOM tree.
///
/// All nodes are stored in a contiguous vector for cache-friendly traversal.
/// Parent/child/sibling links use indices into this vector.
pub struct ArenaDom {
    nodes: Vec<ArenaNode>,
    document: ArenaNodeId,
}

impl ArenaDom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: ArenaNodeId::NONE,
        };
        dom.document = dom.alloc(ArenaNode::new(ArenaNodeData::Document));
        dom
    }

    fn alloc(&mut self, node: ArenaNode) -> ArenaNodeId {
        let id = ArenaNodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> ArenaNodeId {
        self.document
    }

    /// The `<html>` element, if the document has one.
    pub fn root_element(&self) -> Option<ArenaNodeId> {
        self.children(self.document)
            .find(|&id| self.tag_name(id) == Some("html"))
    }

    /// Get a node by ID.
    pub fn get(&self, id: ArenaNodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: ArenaNodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> ArenaNodeId {
        let classes = attrs
            .iter()
            .find(|a| a.name.local.as_ref() == "class")
            .map(|a| a.value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        self.alloc(ArenaNode::new(ArenaNodeData::Element {
            name,
            attrs,
            classes,
        }))
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Comment(text)))
    }

    /// Create a doctype node.
    pub fn create_doctype(&mut self, name: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Doctype { name }))
    }

    /// Append a child to a parent node.
    pub fn append(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = ArenaNodeId::NONE;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: ArenaNodeId, new_node: ArenaNodeId) {
        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Detach a node from its parent, keeping its own subtree intact.
    pub fn detach(&mut self, id: ArenaNodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = ArenaNodeId::NONE;
            node.prev_sibling = ArenaNodeId::NONE;
            node.next_sibling = ArenaNodeId::NONE;
        }
    }

    /// Append text to an existing text node, or create new if last child isn't text.
    pub fn append_text(&mut self, parent: ArenaNodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let ArenaNodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Get the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the DOM is empty (only has document root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: ArenaNodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }

    pub fn parent(&self, id: ArenaNodeId) -> Option<ArenaNodeId> {
        self.get(id).and_then(|n| n.parent.into_option())
    }

    pub fn next_sibling(&self, id: ArenaNodeId) -> Option<ArenaNodeId> {
        self.get(id).and_then(|n| n.next_sibling.into_option())
    }

    pub fn prev_sibling(&self, id: ArenaNodeId) -> Option<ArenaNodeId> {
        self.get(id).and_then(|n| n.prev_sibling.into_option())
    }

    /// Find the first node matching a predicate (DFS, document order).
    pub fn find<F>(&self, predicate: F) -> Option<ArenaNodeId>
    where
        F: Fn(&ArenaNode) -> bool,
    {
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                if predicate(node) {
                    return Some(id);
                }
                let mut children: Vec<_> = self.children(id).collect();
                children.reverse();
                stack.extend(children);
            }
        }
        None
    }

    /// Find element by tag name (first match).
    pub fn find_by_tag(&self, tag: &str) -> Option<ArenaNodeId> {
        self.find(|node| {
            if let ArenaNodeData::Element { name, .. } = &node.data {
                name.local.as_ref() == tag
            } else {
                false
            }
        })
    }

    /// Flag every element matching `predicate` as an opaque subtree.
    ///
    /// Returns how many elements were flagged.
    pub fn mark_opaque<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut count = 0;
        for node in &mut self.nodes {
            if let ArenaNodeData::Element { name, .. } = &node.data
                && predicate(name.local.as_ref())
            {
                node.opaque = true;
                count += 1;
            }
        }
        count
    }

    pub fn is_opaque(&self, id: ArenaNodeId) -> bool {
        self.get(id).is_some_and(|n| n.opaque)
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a ArenaDom,
    current: ArenaNodeId,
}

impl<'a> Iterator for ChildrenIter<'a> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(ArenaNodeId::NONE);
        Some(id)
    }
}

/// Convenience methods for element nodes.
impl ArenaDom {
    /// Get element's local name (tag).
    pub fn element_name(&self, id: ArenaNodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// Element tag name as a string slice.
    pub fn tag_name(&self, id: ArenaNodeId) -> Option<&str> {
        self.element_name(id).map(|n| n.as_ref())
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: ArenaNodeId, attr_name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.as_str())
    }

    /// All attributes of an element, in source order.
    pub fn attributes(&self, id: ArenaNodeId) -> &[Attribute] {
        self.get(id)
            .and_then(|n| match &n.data {
                ArenaNodeData::Element { attrs, .. } => Some(attrs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Get element's classes.
    pub fn element_classes(&self, id: ArenaNodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                ArenaNodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: ArenaNodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, ArenaNodeData::Element { .. }))
    }

    /// Get text content of a text node.
    pub fn text_content(&self, id: ArenaNodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of every descendant text node.
    pub fn descendant_text(&self, id: ArenaNodeId) -> String {
        let mut text = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(t) = self.text_content(current) {
                text.push_str(t);
            }
            let mut children: Vec<_> = self.children(current).collect();
            children.reverse();
            stack.extend(children);
        }
        text
    }

    /// Whether any ancestor of `id` is an element named in `tags`.
    pub fn has_ancestor(&self, id: ArenaNodeId, tags: &[&str]) -> bool {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.tag_name(ancestor).is_some_and(|t| tags.contains(&t)) {
                return true;
            }
            current = self.parent(ancestor);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use html5ever::ns;

    use super::*;

    fn make_qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    #[test]
    fn test_create_elements() {
        let mut dom = ArenaDom::new();

        let code = dom.create_element(
            make_qname("code"),
            vec![Attribute {
                name: make_qname("class"),
                value: "hl language-rust".to_string(),
            }],
        );

        dom.append(dom.document(), code);

        assert_eq!(dom.tag_name(code), Some("code"));
        assert_eq!(dom.get_attr(code, "class"), Some("hl language-rust"));
        assert_eq!(dom.element_classes(code), ["hl", "language-rust"]);
        assert_eq!(dom.parent(code), Some(dom.document()));
    }

    #[test]
    fn test_append_children() {
        let mut dom = ArenaDom::new();

        let parent = dom.create_element(make_qname("ul"), vec![]);
        let child1 = dom.create_element(make_qname("li"), vec![]);
        let child2 = dom.create_element(make_qname("li"), vec![]);

        dom.append(dom.document(), parent);
        dom.append(parent, child1);
        dom.append(parent, child2);

        let children: Vec<_> = dom.children(parent).collect();
        assert_eq!(children, vec![child1, child2]);
        assert_eq!(dom.next_sibling(child1), Some(child2));
        assert_eq!(dom.prev_sibling(child2), Some(child1));
        assert_eq!(dom.prev_sibling(child1), None);
    }

    #[test]
    fn test_text_merging() {
        let mut dom = ArenaDom::new();

        let p = dom.create_element(make_qname("p"), vec![]);
        dom.append(dom.document(), p);

        dom.append_text(p, "Hello, ");
        dom.append_text(p, "World!");

        let children: Vec<_> = dom.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.text_content(children[0]), Some("Hello, World!"));
    }

    #[test]
    fn test_detach_and_insert_before() {
        let mut dom = ArenaDom::new();
        let p = dom.create_element(make_qname("p"), vec![]);
        let a = dom.create_text("a".to_string());
        let b = dom.create_text("b".to_string());
        let c = dom.create_text("c".to_string());
        dom.append(dom.document(), p);
        dom.append(p, a);
        dom.append(p, c);
        dom.insert_before(c, b);

        assert_eq!(dom.descendant_text(p), "abc");

        dom.detach(a);
        assert_eq!(dom.descendant_text(p), "bc");
        assert_eq!(dom.parent(a), None);
    }

    #[test]
    fn test_ancestors_and_opaque() {
        let mut dom = ArenaDom::new();
        let pre = dom.create_element(make_qname("pre"), vec![]);
        let code = dom.create_element(make_qname("code"), vec![]);
        let text = dom.create_text("x".to_string());
        dom.append(dom.document(), pre);
        dom.append(pre, code);
        dom.append(code, text);

        assert!(dom.has_ancestor(text, &["pre"]));
        assert!(!dom.has_ancestor(pre, &["pre", "code"]));

        assert_eq!(dom.mark_opaque(|tag| tag == "code"), 1);
        assert!(dom.is_opaque(code));
        assert!(!dom.is_opaque(pre));
    }
}
