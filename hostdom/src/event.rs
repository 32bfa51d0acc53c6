//! Pointer events and bubbling dispatch.
//!
//! Listeners name a method on an owning framework instance instead of
//! holding a callback, so dispatch stays a pure read of the tree:
//! [`dispatch`] collects matching registrations into [`Invocation`]s and
//! the embedder resolves each method name against its own instances with
//! whatever mutable state that requires.

use log::trace;

use crate::document::Document;
use crate::node::NodeId;

/// Identifies the framework instance a listener belongs to.
pub type OwnerId = u64;

/// Pointer event kinds the binding routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    MouseOver,
    MouseOut,
}

/// A pointer event in document pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub x: f64,
    pub y: f64,
    /// Element the event targets, or `None` for pointer activity outside
    /// any tracked element (still seen by document-level listeners).
    pub target: Option<NodeId>,
}

impl PointerEvent {
    /// An untargeted event, visible only to document-level listeners.
    pub fn new(kind: EventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            target: None,
        }
    }

    /// An event targeting `target`, bubbling from it to the root.
    pub fn at(kind: EventKind, x: f64, y: f64, target: NodeId) -> Self {
        Self {
            kind,
            x,
            y,
            target: Some(target),
        }
    }
}

/// One listener registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub kind: EventKind,
    pub method: String,
    pub owner: OwnerId,
}

/// A matched listener produced by [`dispatch`], ready for the embedder to
/// run.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub owner: OwnerId,
    pub method: String,
    /// Element whose registration matched; `None` for a document-level
    /// registration.
    pub current: Option<NodeId>,
    /// The event, forwarded unchanged.
    pub event: PointerEvent,
}

/// Resolve `event` against the document's listeners.
///
/// Matches are collected in bubble order: the target's own listeners
/// first, then each ancestor's up to the root, then document-level
/// registrations. Within one element, listeners run in attach order.
pub fn dispatch(doc: &Document, event: &PointerEvent) -> Vec<Invocation> {
    let mut out = Vec::new();
    let mut cursor = event.target;
    while let Some(id) = cursor {
        for listener in doc.listeners(id) {
            if listener.kind == event.kind {
                out.push(Invocation {
                    owner: listener.owner,
                    method: listener.method.clone(),
                    current: Some(id),
                    event: *event,
                });
            }
        }
        cursor = doc.parent(id);
    }
    for listener in doc.document_listeners() {
        if listener.kind == event.kind {
            out.push(Invocation {
                owner: listener.owner,
                method: listener.method.clone(),
                current: None,
                event: *event,
            });
        }
    }
    if !out.is_empty() {
        trace!(
            "[dispatch] {:?} at ({}, {}) matched {} listener(s)",
            event.kind,
            event.x,
            event.y,
            out.len()
        );
    }
    out
}
