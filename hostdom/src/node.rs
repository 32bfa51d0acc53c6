//! Element nodes.
//!
//! Nodes live in their [`Document`](crate::Document)'s arena and are
//! addressed by [`NodeId`]. Detached nodes stay in the arena, so an id
//! remains valid for the lifetime of the document that minted it.

use std::collections::HashMap;

use crate::event::Listener;

/// Handle to a node within its owning document.
///
/// Displays as `#<arena index>` in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single element.
///
/// Only elements are modeled. Text content never participates in the
/// queries or mutations this binding exists for, so there are no text or
/// comment nodes.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Tag name, lowercase (`"th"`, `"tr"`, `"div"`, ...).
    pub(crate) tag: String,
    /// Class list, order-preserving and duplicate-free.
    pub(crate) classes: Vec<String>,
    /// Inline styles, `property -> value`.
    pub(crate) styles: HashMap<String, String>,
    /// Width the host's layout assigned, in pixels. Reported by
    /// `offset_width` when no inline width overrides it.
    pub(crate) content_width: f64,
    /// Listener registrations on this element, in attach order.
    pub(crate) listeners: Vec<Listener>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }
}
