//! Document tree: creation, traversal, queries, classes, styles, geometry,
//! and listener registration.

use crate::event::{EventKind, Listener, OwnerId};
use crate::node::{Node, NodeId};

/// Format a pixel length the way inline styles carry it.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Parse a `"<number>px"` style value.
pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// The two selector forms the binding answers: tag name or class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher<'a> {
    Tag(&'a str),
    Class(&'a str),
}

/// An arena of element nodes rooted at a `body` element.
///
/// Ids are plain arena indices minted by this document; passing an id from
/// a different document is a logic error and may panic. Nothing is ever
/// freed, so ids never dangle.
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    document_listeners: Vec<Listener>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            body: NodeId(0),
            document_listeners: Vec::new(),
        }
    }

    /// The root `body` element. Global cursor and selection suppression
    /// styles go here.
    pub fn body(&self) -> NodeId {
        self.body
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // ==== Creation and tree structure ====

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Remove `id` from its parent's child list. The node stays in the
    /// arena and keeps its classes, styles, and listeners; a detached node
    /// simply no longer participates in traversal or bubbling.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|&c| c != id);
            self.node_mut(id).parent = None;
        }
    }

    // ==== Traversal and queries ====

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Position of `id` among its parent's children, or `None` when
    /// detached. Always computed from the current tree, never cached, so it
    /// stays correct when siblings are inserted or removed.
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    fn matches(&self, id: NodeId, matcher: Matcher<'_>) -> bool {
        match matcher {
            Matcher::Tag(tag) => self.tag(id) == tag,
            Matcher::Class(class) => self.has_class(id, class),
        }
    }

    /// Nearest inclusive ancestor matching `matcher`, starting at `id`
    /// itself.
    pub fn closest(&self, id: NodeId, matcher: Matcher<'_>) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if self.matches(node, matcher) {
                return Some(node);
            }
            cursor = self.parent(node);
        }
        None
    }

    /// First descendant of `root` (excluding `root`) matching `matcher`, in
    /// document order.
    pub fn find_first(&self, root: NodeId, matcher: Matcher<'_>) -> Option<NodeId> {
        for &child in self.children(root) {
            if self.matches(child, matcher) {
                return Some(child);
            }
            if let Some(found) = self.find_first(child, matcher) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants of `root` (excluding `root`) matching `matcher`, in
    /// document order.
    pub fn find_all(&self, root: NodeId, matcher: Matcher<'_>) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(root, matcher, &mut out);
        out
    }

    fn collect(&self, root: NodeId, matcher: Matcher<'_>, out: &mut Vec<NodeId>) {
        for &child in self.children(root) {
            if self.matches(child, matcher) {
                out.push(child);
            }
            self.collect(child, matcher, out);
        }
    }

    // ==== Classes ====

    /// Add `class` if not already present. Repeated adds are no-ops.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let node = self.node_mut(id);
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    // ==== Inline styles ====

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        self.node_mut(id)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).styles.get(property).map(String::as_str)
    }

    /// Clear an inline style, restoring whatever the stylesheet provides.
    pub fn remove_style(&mut self, id: NodeId, property: &str) {
        self.node_mut(id).styles.remove(property);
    }

    // ==== Geometry ====

    /// Record the width the host's layout gave this element.
    pub fn set_content_width(&mut self, id: NodeId, width: f64) {
        self.node_mut(id).content_width = width;
    }

    /// Rendered width in pixels: an inline `width` style wins, otherwise
    /// the layout-assigned width.
    pub fn offset_width(&self, id: NodeId) -> f64 {
        self.style(id, "width")
            .and_then(parse_px)
            .unwrap_or(self.node(id).content_width)
    }

    // ==== Listeners ====

    /// Register `method` on `owner` to run when `kind` fires on or bubbles
    /// through this element.
    pub fn add_listener(&mut self, id: NodeId, kind: EventKind, method: &str, owner: OwnerId) {
        self.node_mut(id).listeners.push(Listener {
            kind,
            method: method.to_string(),
            owner,
        });
    }

    /// Remove a registration made by [`add_listener`](Self::add_listener).
    /// Unknown registrations are ignored.
    pub fn remove_listener(&mut self, id: NodeId, kind: EventKind, method: &str, owner: OwnerId) {
        self.node_mut(id)
            .listeners
            .retain(|l| !(l.kind == kind && l.method == method && l.owner == owner));
    }

    pub fn listeners(&self, id: NodeId) -> &[Listener] {
        &self.node(id).listeners
    }

    /// Register a document-level listener. These fire for every event of
    /// `kind` regardless of target, after any bubbled node listeners, which
    /// is what drag tracking needs once the pointer leaves the element it
    /// pressed on.
    pub fn add_document_listener(&mut self, kind: EventKind, method: &str, owner: OwnerId) {
        self.document_listeners.push(Listener {
            kind,
            method: method.to_string(),
            owner,
        });
    }

    pub fn remove_document_listener(&mut self, kind: EventKind, method: &str, owner: OwnerId) {
        self.document_listeners
            .retain(|l| !(l.kind == kind && l.method == method && l.owner == owner));
    }

    pub fn document_listeners(&self) -> &[Listener] {
        &self.document_listeners
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
