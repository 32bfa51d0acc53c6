//! Shared fixture: the subtree the host's table widget is assumed to
//! render, wired into a runtime with the plugin installed.

// Not every test binary uses every helper.
#![allow(dead_code)]

use hostdom::{Document, Matcher, NodeId};
use trellis::class;
use trellis::host::{ColumnMeta, ComponentDef, HostRuntime, InstanceId, TABLE_COMPONENT};

pub struct TableParts {
    pub root: NodeId,
    pub header_wrapper: NodeId,
    pub header_table: NodeId,
    pub header_cols: Vec<NodeId>,
    pub header_cells: Vec<NodeId>,
    pub body_table: NodeId,
    pub body_cols: Vec<NodeId>,
    pub body_rows: Vec<NodeId>,
    /// Body cells, indexed `[row][column]`.
    pub body_cells: Vec<Vec<NodeId>>,
}

/// Render the widget's markup for `widths.len()` columns and `rows` body
/// rows: wrapper divs around a header and a body table, each with a
/// colgroup matching the columns.
pub fn render_table(doc: &mut Document, widths: &[f64], rows: usize) -> TableParts {
    let root = doc.create_element("div");
    doc.add_class(root, class::TABLE);
    doc.append_child(doc.body(), root);

    let header_wrapper = doc.create_element("div");
    doc.add_class(header_wrapper, class::HEADER_WRAPPER);
    doc.append_child(root, header_wrapper);
    let header_table = doc.create_element("table");
    doc.add_class(header_table, class::HEADER);
    doc.append_child(header_wrapper, header_table);
    let header_cols = render_colgroup(doc, header_table, widths);
    let thead = doc.create_element("thead");
    doc.append_child(header_table, thead);
    let header_row = doc.create_element("tr");
    doc.append_child(thead, header_row);
    let header_cells = widths
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
    let body_cols = render_colgroup(doc, body_table, widths);
    let tbody = doc.create_element("tbody");
    doc.append_child(body_table, tbody);
    let mut body_rows = Vec::new();
    let mut body_cells = Vec::new();
    for _ in 0..rows {
        let tr = doc.create_element("tr");
        doc.append_child(tbody, tr);
        let cells: Vec<NodeId> = widths
            .iter()
            .map(|&width| {
                let td = doc.create_element("td");
                doc.set_content_width(td, width);
                doc.append_child(tr, td);
                td
            })
            .collect();
        body_rows.push(tr);
        body_cells.push(cells);
    }

    TableParts {
        root,
        header_wrapper,
        header_table,
        header_cols,
        header_cells,
        body_table,
        body_cols,
        body_rows,
        body_cells,
    }
}

fn render_colgroup(doc: &mut Document, table: NodeId, widths: &[f64]) -> Vec<NodeId> {
    let colgroup = doc.create_element("colgroup");
    doc.append_child(table, colgroup);
    widths
        .iter()
        .map(|&width| {
            let col = doc.create_element("col");
            doc.set_content_width(col, width);
            doc.append_child(colgroup, col);
            col
        })
        .collect()
}

pub struct Fixture {
    pub host: HostRuntime,
    pub id: InstanceId,
    pub parts: TableParts,
}

impl Fixture {
    /// Full stack: stock widget registered, plugin installed, one table
    /// rendered and spawned with the given prop overrides.
    pub fn new(widths: &[f64], rows: usize, overrides: &[(&str, bool)]) -> Fixture {
        let mut host = HostRuntime::new();
        host.components.register(TABLE_COMPONENT, ComponentDef::stock());
        trellis::install(&mut host.components).unwrap();
        let parts = render_table(&mut host.doc, widths, rows);
        let columns = widths.iter().map(|&width| ColumnMeta::new(width)).collect();
        let id = host
            .spawn(TABLE_COMPONENT, parts.root, columns, overrides)
            .unwrap();
        Fixture { host, id, parts }
    }

    /// The handle injected into header cell `index`, if any.
    pub fn handle(&self, index: usize) -> Option<NodeId> {
        let th = self.parts.header_cells[index];
        self.host
            .doc
            .find_first(th, Matcher::Class(class::RESIZE_HANDLE))
    }
}
