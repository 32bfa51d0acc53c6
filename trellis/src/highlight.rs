//! Row and column hover highlighting.
//!
//! Body cells are watched through the host widget's own cell hover
//! notifications (intercepted at spawn), header cells through a pair of
//! delegated listeners on the header wrapper. Either source resolves to a
//! column index at event time and toggles marker classes; the stylesheet
//! decides what the markers look like.

use log::trace;

use hostdom::{Document, EventKind, Matcher, NodeId};

use crate::class;
use crate::enhancer::{Enhancer, EventPayload, PropDef, TableCtx};
use crate::host::CellEvent;

/// Prop enabling hover highlighting on an instance.
pub const HIGHLIGHT_CURRENT_COL: &str = "highlight_current_col";

/// Build the highlight enhancer.
pub fn enhancer() -> Enhancer {
    Enhancer {
        props: vec![PropDef {
            name: HIGHLIGHT_CURRENT_COL,
            default: false,
        }],
        methods: vec![
            ("on_cell_enter", on_cell_enter),
            ("on_cell_leave", on_cell_leave),
            ("on_header_over", on_header_over),
            ("on_header_out", on_header_out),
        ],
        created: Some(created),
        mounted: Some(mounted),
        before_destroy: Some(before_destroy),
        ..Default::default()
    }
}

fn created(ctx: &mut TableCtx<'_>) {
    // The prop gates the class writes inside the methods, never the
    // interception itself; forwarding must keep working either way.
    ctx.instance.intercept(CellEvent::Enter, "on_cell_enter");
    ctx.instance.intercept(CellEvent::Leave, "on_cell_leave");
}

fn mounted(ctx: &mut TableCtx<'_>) {
    if !ctx.instance.prop(HIGHLIGHT_CURRENT_COL) {
        return;
    }
    // The header wrapper exists only after the widget's first render.
    ctx.instance.next_tick(attach_header_listeners);
}

fn attach_header_listeners(ctx: &mut TableCtx<'_>) {
    let root = ctx.instance.root();
    let Some(wrapper) = ctx.doc.find_first(root, Matcher::Class(class::HEADER_WRAPPER)) else {
        return;
    };
    let owner = ctx.instance.id().owner();
    ctx.doc
        .add_listener(wrapper, EventKind::MouseOver, "on_header_over", owner);
    ctx.doc
        .add_listener(wrapper, EventKind::MouseOut, "on_header_out", owner);
}

fn before_destroy(ctx: &mut TableCtx<'_>) {
    if !ctx.instance.prop(HIGHLIGHT_CURRENT_COL) {
        return;
    }
    let root = ctx.instance.root();
    let Some(wrapper) = ctx.doc.find_first(root, Matcher::Class(class::HEADER_WRAPPER)) else {
        return;
    };
    let owner = ctx.instance.id().owner();
    ctx.doc
        .remove_listener(wrapper, EventKind::MouseOver, "on_header_over", owner);
    ctx.doc
        .remove_listener(wrapper, EventKind::MouseOut, "on_header_out", owner);
}

// ==== Methods ====

fn on_cell_enter(ctx: &mut TableCtx<'_>, payload: &EventPayload) {
    let EventPayload::Cell { cell, .. } = payload else {
        return;
    };
    mark_cell(ctx, *cell, true);
}

fn on_cell_leave(ctx: &mut TableCtx<'_>, payload: &EventPayload) {
    let EventPayload::Cell { cell, .. } = payload else {
        return;
    };
    mark_cell(ctx, *cell, false);
}

fn on_header_over(ctx: &mut TableCtx<'_>, payload: &EventPayload) {
    let EventPayload::Pointer(event) = payload else {
        return;
    };
    mark_header(ctx, event.target, true);
}

fn on_header_out(ctx: &mut TableCtx<'_>, payload: &EventPayload) {
    let EventPayload::Pointer(event) = payload else {
        return;
    };
    mark_header(ctx, event.target, false);
}

// ==== Marker plumbing ====

/// Toggle the row marker and the column markers for a hovered body cell.
fn mark_cell(ctx: &mut TableCtx<'_>, cell: NodeId, on: bool) {
    if !ctx.instance.prop(HIGHLIGHT_CURRENT_COL) {
        return;
    }
    let Some(row) = ctx.doc.parent(cell) else {
        return;
    };
    let Some(table) = ctx.doc.closest(row, Matcher::Class(class::TABLE)) else {
        return;
    };
    set_class(ctx.doc, row, class::ROW_HOVER, on);
    let Some(index) = ctx.doc.child_index(cell) else {
        return;
    };
    trace!("[highlight] column {index} {}", if on { "on" } else { "off" });
    mark_column(ctx.doc, table, index, on);
}

/// Toggle the column markers for a hovered header cell. Header hover never
/// marks a row.
fn mark_header(ctx: &mut TableCtx<'_>, target: Option<NodeId>, on: bool) {
    if !ctx.instance.prop(HIGHLIGHT_CURRENT_COL) {
        return;
    }
    let Some(target) = target else {
        return;
    };
    let Some(th) = ctx.doc.closest(target, Matcher::Tag("th")) else {
        return;
    };
    let Some(table) = ctx.doc.closest(th, Matcher::Class(class::TABLE)) else {
        return;
    };
    let Some(index) = ctx.doc.child_index(th) else {
        return;
    };
    mark_column(ctx.doc, table, index, on);
}

/// Add or remove the column marker on the cell at `index` of every header
/// and body row of `table`. Rows short of `index` cells are skipped.
fn mark_column(doc: &mut Document, table: NodeId, index: usize, on: bool) {
    for wrapper_class in [class::HEADER_WRAPPER, class::BODY_WRAPPER] {
        let Some(wrapper) = doc.find_first(table, Matcher::Class(wrapper_class)) else {
            continue;
        };
        for row in doc.find_all(wrapper, Matcher::Tag("tr")) {
            if let Some(cell) = doc.children(row).get(index).copied() {
                set_class(doc, cell, class::COL_HOVER, on);
            }
        }
    }
}

fn set_class(doc: &mut Document, id: NodeId, class: &str, on: bool) {
    if on {
        doc.add_class(id, class);
    } else {
        doc.remove_class(id, class);
    }
}
