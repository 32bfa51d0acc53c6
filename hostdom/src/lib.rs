//! Minimal element-tree binding for embedding UI logic in a host document.
//!
//! The crate models just enough of a retained element tree for widget code
//! to query structure, toggle classes, write inline styles, and route
//! pointer events: an arena-backed [`Document`], class/style accessors, and
//! a bubbling [`dispatch`] that resolves listener registrations into named
//! method invocations for the embedding framework to run.

pub mod document;
pub mod event;
pub mod node;

pub use document::{parse_px, px, Document, Matcher};
pub use event::{dispatch, EventKind, Invocation, Listener, OwnerId, PointerEvent};
pub use node::NodeId;
