//! Drag column resizing.
//!
//! Each resizable header cell (except the last, which absorbs leftover
//! width) gets a handle element injected on mount and after every update.
//! Pressing a handle opens a session: document-level move/up listeners
//! track the pointer anywhere on the page, moves write the clamped width
//! through every mirror that must agree, and release tears the session
//! back down.

use log::{debug, trace};

use hostdom::{px, Document, EventKind, Matcher, NodeId};

use crate::class;
use crate::enhancer::{Enhancer, EnhancerState, EventPayload, PropDef, Props, TableCtx};

/// Prop enabling drag resizing on an instance.
pub const RESIZABLE: &str = "resizable";

/// Narrowest a column can be dragged, in pixels.
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

/// Per-instance drag session and handle bookkeeping. The zero value is
/// inert; the enhancer's initializer establishes the working floor.
#[derive(Debug, Default)]
pub struct ResizeState {
    /// True while a drag session is live.
    pub resizing: bool,
    /// Header cell the live session is resizing.
    pub column: Option<NodeId>,
    /// Pointer x at session start.
    pub start_x: f64,
    /// Rendered width of the cell at session start.
    pub start_width: f64,
    /// Floor a drag cannot shrink a column below.
    pub min_column_width: f64,
    /// Handles currently injected by this instance.
    pub handles: Vec<NodeId>,
}

/// Build the resize enhancer.
pub fn enhancer() -> Enhancer {
    Enhancer {
        props: vec![PropDef {
            name: RESIZABLE,
            default: false,
        }],
        init: Some(init_state),
        methods: vec![
            ("start_resize", start_resize),
            ("on_resize_move", on_resize_move),
            ("stop_resize", stop_resize),
        ],
        mounted: Some(schedule_handles),
        updated: Some(schedule_handles),
        before_destroy: Some(before_destroy),
        ..Default::default()
    }
}

fn init_state(_props: &Props, state: &mut EnhancerState) {
    state.resize.min_column_width = MIN_COLUMN_WIDTH;
}

// ==== Handle management ====

fn schedule_handles(ctx: &mut TableCtx<'_>) {
    if !ctx.instance.prop(RESIZABLE) {
        return;
    }
    // Header cells may have re-rendered; re-inject once the flush settles.
    ctx.instance.next_tick(init_handles);
}

fn init_handles(ctx: &mut TableCtx<'_>) {
    cleanup_handles(ctx);
    let root = ctx.instance.root();
    let Some(wrapper) = ctx.doc.find_first(root, Matcher::Class(class::HEADER_WRAPPER)) else {
        return;
    };
    let headers = ctx.doc.find_all(wrapper, Matcher::Tag("th"));
    // The last column keeps its natural width, so it gets no handle.
    let Some((_, resizable)) = headers.split_last() else {
        return;
    };
    for &header in resizable {
        add_handle(ctx, header);
    }
    trace!("[resize] {} handle(s) in place", ctx.instance.state.resize.handles.len());
}

fn add_handle(ctx: &mut TableCtx<'_>, header: NodeId) {
    // A cell that already carries a handle keeps it as is.
    if ctx
        .doc
        .find_first(header, Matcher::Class(class::RESIZE_HANDLE))
        .is_some()
    {
        return;
    }
    let handle = ctx.doc.create_element("div");
    ctx.doc.add_class(handle, class::RESIZE_HANDLE);
    ctx.doc
        .add_listener(handle, EventKind::MouseDown, "start_resize", ctx.instance.id().owner());
    // The handle is positioned against the cell's edge.
    if ctx.doc.style(header, "position").is_none() {
        ctx.doc.set_style(header, "position", "relative");
    }
    ctx.doc.set_style(header, "overflow", "visible");
    ctx.doc.append_child(header, handle);
    ctx.instance.state.resize.handles.push(handle);
}

fn cleanup_handles(ctx: &mut TableCtx<'_>) {
    let handles = std::mem::take(&mut ctx.instance.state.resize.handles);
    for handle in handles {
        ctx.doc.detach(handle);
    }
}

// ==== Drag session ====

fn start_resize(ctx: &mut TableCtx<'_>, payload: &EventPayload) {
    let EventPayload::Pointer(event) = payload else {
        return;
    };
    // A second press while a session is live would clobber the session
    // anchor and double-register the document listeners.
    if ctx.instance.state.resize.resizing {
        return;
    }
    let Some(handle) = event.target else {
        return;
    };
    let Some(header) = ctx.doc.closest(handle, Matcher::Tag("th")) else {
        return;
    };

    let start_width = ctx.doc.offset_width(header);
    let state = &mut ctx.instance.state.resize;
    state.resizing = true;
    state.column = Some(header);
    state.start_x = event.x;
    state.start_width = start_width;
    debug!("[resize] start on {header} at x={} width={start_width}", event.x);

    // The pointer leaves the handle immediately on any real drag, so the
    // session listens at the document level.
    let owner = ctx.instance.id().owner();
    ctx.doc
        .add_document_listener(EventKind::MouseMove, "on_resize_move", owner);
    ctx.doc
        .add_document_listener(EventKind::MouseUp, "stop_resize", owner);

    let body = ctx.doc.body();
    ctx.doc.set_style(body, "cursor", "col-resize");
    ctx.doc.set_style(body, "user-select", "none");

    ctx.doc.add_class(header, class::RESIZING_COLUMN);
    ctx.doc.add_class(ctx.instance.root(), class::RESIZING_TABLE);
    ctx.doc.add_class(handle, class::HANDLE_ACTIVE);
}

fn on_resize_move(ctx: &mut TableCtx<'_>, payload: &EventPayload) {
    let EventPayload::Pointer(event) = payload else {
        return;
    };
    if !ctx.instance.state.resize.resizing {
        return;
    }
    let Some(header) = ctx.instance.state.resize.column else {
        return;
    };
    let delta = event.x - ctx.instance.state.resize.start_x;
    let width = (ctx.instance.state.resize.start_width + delta)
        .max(ctx.instance.state.resize.min_column_width);
    trace!("[resize] move x={} -> width={width}", event.x);
    set_column_width(ctx, header, width);
}

fn stop_resize(ctx: &mut TableCtx<'_>, _payload: &EventPayload) {
    let state = &mut ctx.instance.state.resize;
    if !state.resizing {
        return;
    }
    state.resizing = false;
    let column = state.column.take();
    let handles = state.handles.clone();

    let owner = ctx.instance.id().owner();
    ctx.doc
        .remove_document_listener(EventKind::MouseMove, "on_resize_move", owner);
    ctx.doc
        .remove_document_listener(EventKind::MouseUp, "stop_resize", owner);

    let body = ctx.doc.body();
    ctx.doc.remove_style(body, "cursor");
    ctx.doc.remove_style(body, "user-select");

    if let Some(header) = column {
        ctx.doc.remove_class(header, class::RESIZING_COLUMN);
    }
    ctx.doc.remove_class(ctx.instance.root(), class::RESIZING_TABLE);
    for handle in handles {
        ctx.doc.remove_class(handle, class::HANDLE_ACTIVE);
    }
    debug!("[resize] stop");
}

// ==== Width writing ====

/// Write `width` through every mirror that must agree: the host's column
/// record, the header cell's inline styles, both colgroups, and every body
/// cell in the column. Queues one layout request for after the writes.
pub fn set_column_width(ctx: &mut TableCtx<'_>, header: NodeId, width: f64) {
    let Some(index) = ctx.doc.child_index(header) else {
        return;
    };
    let root = ctx.instance.root();
    let value = px(width);

    if let Some(meta) = ctx.instance.columns.get_mut(index) {
        meta.width = Some(width);
        meta.real_width = width;
        meta.min_width = width;
    }

    for property in ["width", "min-width", "max-width"] {
        ctx.doc.set_style(header, property, &value);
    }

    set_table_column(ctx.doc, root, class::HEADER, index, &value);
    set_table_column(ctx.doc, root, class::BODY, index, &value);

    if let Some(body_wrapper) = ctx.doc.find_first(root, Matcher::Class(class::BODY_WRAPPER)) {
        for row in ctx.doc.find_all(body_wrapper, Matcher::Tag("tr")) {
            let Some(cell) = ctx.doc.children(row).get(index).copied() else {
                continue;
            };
            for property in ["width", "min-width", "max-width"] {
                ctx.doc.set_style(cell, property, &value);
            }
        }
    }

    ctx.instance.next_tick(|ctx| ctx.instance.request_layout());
}

/// Pin one `col` entry of the table with class `table_class` to `value`,
/// forcing the table into fixed layout so the pin actually holds.
fn set_table_column(doc: &mut Document, root: NodeId, table_class: &str, index: usize, value: &str) {
    let Some(table) = doc.find_first(root, Matcher::Class(table_class)) else {
        return;
    };
    doc.set_style(table, "table-layout", "fixed");
    let Some(colgroup) = doc.find_first(table, Matcher::Tag("colgroup")) else {
        return;
    };
    let Some(col) = doc.children(colgroup).get(index).copied() else {
        return;
    };
    doc.set_style(col, "width", value);
}

// ==== Lifecycle ====

fn before_destroy(ctx: &mut TableCtx<'_>) {
    // Unconditional: a teardown mid-drag must not leave document listeners
    // or global styles behind.
    let owner = ctx.instance.id().owner();
    ctx.doc
        .remove_document_listener(EventKind::MouseMove, "on_resize_move", owner);
    ctx.doc
        .remove_document_listener(EventKind::MouseUp, "stop_resize", owner);
    let body = ctx.doc.body();
    ctx.doc.remove_style(body, "cursor");
    ctx.doc.remove_style(body, "user-select");
    cleanup_handles(ctx);
}
