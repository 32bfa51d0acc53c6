//! Class names shared between the host widget's markup, the enhancers, and
//! the stylesheet.
//!
//! The `data-table*` names describe the structure the host's table widget
//! renders; the enhancers only ever query them. The `trellis-*` names are
//! markers the enhancers add and remove; their visual treatment lives in
//! the application's stylesheet.

/// Root element of the host's table widget.
pub const TABLE: &str = "data-table";
/// Wrapper around the header table.
pub const HEADER_WRAPPER: &str = "data-table__header-wrapper";
/// The header table element.
pub const HEADER: &str = "data-table__header";
/// Wrapper around the body table.
pub const BODY_WRAPPER: &str = "data-table__body-wrapper";
/// The body table element.
pub const BODY: &str = "data-table__body";

/// Marker on the hovered body row.
pub const ROW_HOVER: &str = "trellis-row-hover";
/// Marker on every cell of the hovered column.
pub const COL_HOVER: &str = "trellis-col-hover";
/// Drag handle injected into resizable header cells.
pub const RESIZE_HANDLE: &str = "trellis-resize-handle";
/// Header cell whose column is being resized.
pub const RESIZING_COLUMN: &str = "trellis-resizing-column";
/// Table root while a resize session is active.
pub const RESIZING_TABLE: &str = "trellis-resizing";
/// The pressed handle while its session is active.
pub const HANDLE_ACTIVE: &str = "is-resizing";
