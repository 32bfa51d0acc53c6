//! Walks one table through the full enhanced lifecycle: install, spawn,
//! hover a cell, drag a column, tear down. Run with `--example drag`.

use simplelog::{Config, LevelFilter, SimpleLogger};

use hostdom::{Document, EventKind, NodeId, PointerEvent};
use trellis::class;
use trellis::host::{CellEvent, ColumnMeta, ComponentDef, HostRuntime, TABLE_COMPONENT};

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("failed to initialize logger");

    let mut host = HostRuntime::new();
    host.components.register(TABLE_COMPONENT, ComponentDef::stock());
    trellis::install(&mut host.components).expect("table component is registered");

    let widths = [120.0, 180.0, 90.0];
    let (root, header_cells, first_body_cell) = render_table(&mut host.doc, &widths, 3);
    let columns = widths.iter().map(|&w| ColumnMeta::new(w)).collect();
    let id = host
        .spawn(
            TABLE_COMPONENT,
            root,
            columns,
            &[("highlight_current_col", true), ("resizable", true)],
        )
        .expect("spawn enhanced table");

    // Hover the first body cell, then leave it.
    host.emit_cell(
        id,
        CellEvent::Enter,
        first_body_cell,
        PointerEvent::new(EventKind::MouseOver, 10.0, 40.0),
    );
    println!(
        "hovered cell classes: {:?}",
        host.doc.classes(first_body_cell)
    );
    host.emit_cell(
        id,
        CellEvent::Leave,
        first_body_cell,
        PointerEvent::new(EventKind::MouseOut, 10.0, 40.0),
    );

    // Drag the first column 45px wider, well past its neighbors.
    let handle = host
        .doc
        .find_first(header_cells[0], hostdom::Matcher::Class(class::RESIZE_HANDLE))
        .expect("handle injected on mount");
    host.dispatch(PointerEvent::at(EventKind::MouseDown, 120.0, 5.0, handle));
    host.dispatch(PointerEvent::new(EventKind::MouseMove, 150.0, 8.0));
    host.dispatch(PointerEvent::new(EventKind::MouseMove, 165.0, 9.0));
    host.dispatch(PointerEvent::new(EventKind::MouseUp, 165.0, 9.0));

    for (i, th) in header_cells.iter().enumerate() {
        println!(
            "column {i}: style width {:?}, record {:?}",
            host.doc.style(*th, "width"),
            host.instance(id).expect("instance alive").columns[i].width,
        );
    }

    host.destroy(id);
    println!(
        "after destroy: {} document listener(s)",
        host.doc.document_listeners().len()
    );
}

/// The markup the host's table widget would render: wrappers, header and
/// body tables, colgroups, and matching cells.
fn render_table(doc: &mut Document, widths: &[f64], rows: usize) -> (NodeId, Vec<NodeId>, NodeId) {
    let root = doc.create_element("div");
    doc.add_class(root, class::TABLE);
    doc.append_child(doc.body(), root);

    let header_wrapper = doc.create_element("div");
    doc.add_class(header_wrapper, class::HEADER_WRAPPER);
    doc.append_child(root, header_wrapper);
    let header_table = doc.create_element("table");
    doc.add_class(header_table, class::HEADER);
    doc.append_child(header_wrapper, header_table);
    append_colgroup(doc, header_table, widths);
    let header_row = doc.create_element("tr");
    doc.append_child(header_table, header_row);
    let header_cells: Vec<NodeId> = widths
        .iter()
        .map(|&width| {
            let th = doc.create_element("th");
            doc.set_content_width(th, width);
            doc.append_child(header_row, th);
            th
        })
        .collect();

    let body_wrapper = doc.create_element("div");
    doc.add_class(body_wrapper, class::BODY_WRAPPER);
    doc.append_child(root, body_wrapper);
    let body_table = doc.create_element("table");
    doc.add_class(body_table, class::BODY);
    doc.append_child(body_wrapper, body_table);
    append_colgroup(doc, body_table, widths);
    let mut first_body_cell = None;
    for _ in 0..rows {
        let tr = doc.create_element("tr");
        doc.append_child(body_table, tr);
        for &width in widths {
            let td = doc.create_element("td");
            doc.set_content_width(td, width);
            doc.append_child(tr, td);
            first_body_cell.get_or_insert(td);
        }
    }

    (root, header_cells, first_body_cell.expect("at least one row"))
}

fn append_colgroup(doc: &mut Document, table: NodeId, widths: &[f64]) {
    let colgroup = doc.create_element("colgroup");
    doc.append_child(table, colgroup);
    for &width in widths {
        let col = doc.create_element("col");
        doc.set_content_width(col, width);
        doc.append_child(colgroup, col);
    }
}
