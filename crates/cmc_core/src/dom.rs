//! Document tree
//!
//! A slot-map arena of element and text nodes. The page layer only ever sees
//! a [`Document`] through [`NodeId`] handles, so a node removed from the tree
//! simply stops resolving instead of dangling.
//!
//! Queries (`query_class`, `get_element_by_id`, ...) only look at nodes
//! attached under [`Document::body`], in document order.

use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a node in a [`Document`]
    pub struct NodeId;
}

/// Element payload
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: SmallVec<[String; 4]>,
    pub attributes: IndexMap<String, String>,
    pub style: IndexMap<String, String>,
}

/// Node payload
#[derive(Clone, Debug)]
pub enum NodeKind {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory document rooted at a `body` element
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    body: NodeId,
    focused: Option<NodeId>,
    selection: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Node {
            kind: NodeKind::Element(Element {
                tag: "body".to_string(),
                ..Default::default()
            }),
            parent: None,
            children: Vec::new(),
        });
        Self {
            nodes,
            body,
            focused: None,
            selection: None,
        }
    }

    /// The root `body` element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Node {
            kind: NodeKind::Element(Element {
                tag: tag.to_ascii_lowercase(),
                ..Default::default()
            }),
            parent: None,
            children: Vec::new(),
        })
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.nodes.insert(Node {
            kind: NodeKind::Text(text.into()),
            parent: None,
            children: Vec::new(),
        })
    }

    /// Start building a detached element
    pub fn build(&mut self, tag: &str) -> ElementBuilder<'_> {
        let node = self.create_element(tag);
        ElementBuilder { doc: self, node }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Whether the node is attached under `body`
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(node) && self.is_inclusive_ancestor(self.body, node)
    }

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node).map(|n| &n.kind)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match self.kind(node)? {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node)?.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(self.kind(node), Some(NodeKind::Text(_)))
    }

    /// Lowercase tag name of an element
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    /// Data of a text node
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match self.kind(node)? {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element(_) => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// `true` if `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // =========================================================================
    // Tree mutation
    // =========================================================================

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_element(parent)
            || !self.contains(child)
            || child == self.body
            || self.is_inclusive_ancestor(child, parent)
        {
            tracing::trace!("append_child ignored: invalid parent/child pair");
            return;
        }
        self.detach(child);
        if let Some(n) = self.nodes.get_mut(child) {
            n.parent = Some(parent);
        }
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
    }

    /// Unlink a node from its parent, keeping it (and its subtree) alive
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(node).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|&c| c != node);
        }
    }

    /// Put `new` in the position of `old`. `old` is left detached.
    ///
    /// Returns `false` if `old` has no parent or the swap would create a cycle.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> bool {
        if old == new || !self.contains(new) {
            return false;
        }
        let Some(parent) = self.parent(old) else {
            return false;
        };
        if self.is_inclusive_ancestor(new, parent) {
            return false;
        }
        self.detach(new);
        let Some(index) = self.children(parent).iter().position(|&c| c == old) else {
            return false;
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children[index] = new;
        }
        if let Some(n) = self.nodes.get_mut(new) {
            n.parent = Some(parent);
        }
        if let Some(n) = self.nodes.get_mut(old) {
            n.parent = None;
        }
        true
    }

    /// Detach a node and free it together with its subtree
    pub fn remove(&mut self, node: NodeId) {
        if node == self.body || !self.contains(node) {
            return;
        }
        self.detach(node);
        let mut doomed = self.descendants(node);
        doomed.push(node);
        for id in doomed {
            if self.focused == Some(id) {
                self.focused = None;
            }
            if self.selection == Some(id) {
                self.selection = None;
            }
            self.nodes.remove(id);
        }
    }

    /// Replace all children of an element with a single text node
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        if !self.is_element(node) {
            if let Some(Node {
                kind: NodeKind::Text(data),
                ..
            }) = self.nodes.get_mut(node)
            {
                *data = text.to_string();
            }
            return;
        }
        self.clear_children(node);
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(node, text_node);
        }
    }

    /// Remove every child of a node
    pub fn clear_children(&mut self, node: NodeId) {
        let children = self.children(node).to_vec();
        for child in children {
            self.remove(child);
        }
    }

    // =========================================================================
    // Element properties
    // =========================================================================

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.id.as_deref())
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.element_mut(node) {
            el.id = Some(id.to_string());
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            self.has_class(node, class)
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.shift_remove(name);
        }
    }

    /// Inline style property, `None` when unset
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.style.get(property))
            .map(String::as_str)
    }

    /// Set an inline style property. An empty value clears it.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            if value.is_empty() {
                el.style.shift_remove(property);
            } else {
                el.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    /// Concatenated data of every descendant text node
    pub fn text_content(&self, node: NodeId) -> String {
        if let Some(text) = self.text(node) {
            return text.to_string();
        }
        self.descendants(node)
            .into_iter()
            .filter_map(|id| self.text(id))
            .collect()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Descendants of `node` in document (pre-)order, excluding `node`
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Every attached element, `body` first
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.body)
            .chain(self.descendants(self.body))
            .filter(move |&id| self.is_element(id))
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements().find(|&node| self.id(node) == Some(id))
    }

    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|&node| self.has_class(node, class))
            .collect()
    }

    pub fn query_attribute(&self, name: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|&node| self.attribute(node, name).is_some())
            .collect()
    }

    pub fn query_tag(&self, tag: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|&node| self.tag(node) == Some(tag))
            .collect()
    }

    /// First descendant matching `pred`
    pub fn find_descendant<F>(&self, node: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&Self, NodeId) -> bool,
    {
        self.descendants(node)
            .into_iter()
            .find(|&id| pred(self, id))
    }

    /// `node` itself or its nearest ancestor matching `pred`
    pub fn closest<F>(&self, node: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&Self, NodeId) -> bool,
    {
        let mut current = Some(node);
        while let Some(id) = current {
            if pred(self, id) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    pub fn closest_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.closest(node, |doc, id| doc.has_class(id, class))
    }

    // =========================================================================
    // Focus and selection
    // =========================================================================

    pub fn focus(&mut self, node: NodeId) {
        if self.is_element(node) {
            self.focused = Some(node);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Select the contents of an editable element
    pub fn select(&mut self, node: NodeId) {
        if self.is_element(node) {
            self.selection = Some(node);
        }
    }

    /// Text of the current selection
    pub fn selected_text(&self) -> Option<String> {
        let node = self.selection?;
        Some(
            self.attribute(node, "value")
                .map(str::to_string)
                .unwrap_or_else(|| self.text_content(node)),
        )
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize a subtree to HTML markup
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node) else {
            return;
        };
        match &n.kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                if let Some(id) = &el.id {
                    push_attribute(out, "id", id);
                }
                if !el.classes.is_empty() {
                    push_attribute(out, "class", &el.classes.join(" "));
                }
                for (name, value) in &el.attributes {
                    push_attribute(out, name, value);
                }
                if !el.style.is_empty() {
                    let style = el
                        .style
                        .iter()
                        .map(|(k, v)| format!("{k}: {v}"))
                        .collect::<Vec<_>>()
                        .join("; ");
                    push_attribute(out, "style", &style);
                }
                out.push('>');
                for &child in &n.children {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_text(value).replace('"', "&quot;"));
    out.push('"');
}

/// Chained construction of an element
pub struct ElementBuilder<'a> {
    doc: &'a mut Document,
    node: NodeId,
}

impl ElementBuilder<'_> {
    pub fn id(self, id: &str) -> Self {
        self.doc.set_id(self.node, id);
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.doc.add_class(self.node, class);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.doc.set_attribute(self.node, name, value);
        self
    }

    pub fn style(self, property: &str, value: &str) -> Self {
        self.doc.set_style(self.node, property, value);
        self
    }

    /// Append a text child
    pub fn text(self, text: &str) -> Self {
        let text_node = self.doc.create_text(text);
        self.doc.append_child(self.node, text_node);
        self
    }

    /// Finish as a child of `parent`
    pub fn append_to(self, parent: NodeId) -> NodeId {
        self.doc.append_child(parent, self.node);
        self.node
    }

    /// Finish detached
    pub fn finish(self) -> NodeId {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let block = doc.build("div").class("code-block").append_to(body);
        let button = doc.build("button").class("copy-btn").text("Copy").append_to(block);
        let pre = doc.build("pre").append_to(block);
        let code = doc.build("code").text("let x = 1;").append_to(pre);
        (doc, block, button, code)
    }

    #[test]
    fn test_queries_follow_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.build("a").class("link").append_to(body);
        let div = doc.build("div").append_to(body);
        let b = doc.build("a").class("link").append_to(div);
        let c = doc.build("a").class("link").append_to(body);

        assert_eq!(doc.query_class("link"), vec![a, b, c]);
        assert_eq!(doc.query_tag("a"), vec![a, b, c]);
    }

    #[test]
    fn test_closest_includes_self() {
        let (doc, block, button, code) = sample();
        assert_eq!(doc.closest_class(button, "code-block"), Some(block));
        assert_eq!(doc.closest_class(block, "code-block"), Some(block));
        assert_eq!(doc.closest_class(code, "missing"), None);
    }

    #[test]
    fn test_text_content_concatenates() {
        let (doc, block, _, _) = sample();
        assert_eq!(doc.text_content(block), "Copylet x = 1;");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut doc = Document::new();
        let body = doc.body();
        let first = doc.create_text("a");
        let middle = doc.create_text("b");
        let last = doc.create_text("c");
        doc.append_child(body, first);
        doc.append_child(body, middle);
        doc.append_child(body, last);

        let span = doc.build("span").text("B").finish();
        assert!(doc.replace(middle, span));
        assert_eq!(doc.children(body), &[first, span, last]);
        assert_eq!(doc.parent(middle), None);
        assert_eq!(doc.text_content(body), "aBc");
    }

    #[test]
    fn test_remove_frees_subtree() {
        let (mut doc, block, button, code) = sample();
        doc.focus(button);
        doc.remove(block);
        assert!(!doc.contains(block));
        assert!(!doc.contains(code));
        assert_eq!(doc.focused(), None);
        assert!(doc.children(doc.body()).is_empty());
    }

    #[test]
    fn test_append_rejects_cycles() {
        let (mut doc, block, _, code) = sample();
        doc.append_child(code, block);
        assert_eq!(doc.parent(block), Some(doc.body()));
    }

    #[test]
    fn test_empty_style_clears_property() {
        let (mut doc, _, button, _) = sample();
        doc.set_style(button, "color", "#22d3ee");
        assert_eq!(doc.style(button, "color"), Some("#22d3ee"));
        doc.set_style(button, "color", "");
        assert_eq!(doc.style(button, "color"), None);
    }

    #[test]
    fn test_toggle_class() {
        let (mut doc, block, _, _) = sample();
        assert!(doc.toggle_class(block, "open"));
        assert!(!doc.toggle_class(block, "open"));
        assert!(doc.has_class(block, "code-block"));
    }

    #[test]
    fn test_to_html() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.build("button")
            .class("hex-code-btn")
            .attr("data-hex", "#0891B2")
            .text("a < b")
            .append_to(body);
        assert_eq!(
            doc.to_html(body),
            "<body><button class=\"hex-code-btn\" data-hex=\"#0891B2\">a &lt; b</button></body>"
        );
    }
}
