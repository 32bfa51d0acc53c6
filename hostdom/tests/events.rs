use hostdom::{dispatch, Document, EventKind, NodeId, PointerEvent};

const OWNER: u64 = 7;

fn nested_tree(doc: &mut Document) -> (NodeId, NodeId, NodeId) {
    let outer = doc.create_element("div");
    let th = doc.create_element("th");
    let handle = doc.create_element("div");
    doc.append_child(doc.body(), outer);
    doc.append_child(outer, th);
    doc.append_child(th, handle);
    (outer, th, handle)
}

// ============================================================================
// Bubbling
// ============================================================================

#[test]
fn test_dispatch_bubbles_target_to_root() {
    let mut doc = Document::new();
    let (outer, th, handle) = nested_tree(&mut doc);
    doc.add_listener(handle, EventKind::MouseDown, "on_handle", OWNER);
    doc.add_listener(outer, EventKind::MouseDown, "on_outer", OWNER);
    // Wrong kind on the path must not match.
    doc.add_listener(th, EventKind::MouseUp, "on_up", OWNER);

    let hits = dispatch(&doc, &PointerEvent::at(EventKind::MouseDown, 4.0, 2.0, handle));

    let methods: Vec<&str> = hits.iter().map(|i| i.method.as_str()).collect();
    assert_eq!(methods, ["on_handle", "on_outer"]);
    assert_eq!(hits[0].current, Some(handle));
    assert_eq!(hits[1].current, Some(outer));
    assert_eq!(hits[0].event.target, Some(handle), "target is preserved");
}

#[test]
fn test_dispatch_ancestor_listener_sees_descendant_target() {
    let mut doc = Document::new();
    let (_, th, handle) = nested_tree(&mut doc);
    // Delegation: listen on the ancestor, fire on the descendant.
    doc.add_listener(th, EventKind::MouseOver, "on_over", OWNER);

    let hits = dispatch(&doc, &PointerEvent::at(EventKind::MouseOver, 0.0, 0.0, handle));

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].current, Some(th));
    assert_eq!(hits[0].event.target, Some(handle));
}

#[test]
fn test_dispatch_detached_subtree_does_not_bubble_out() {
    let mut doc = Document::new();
    let (outer, th, handle) = nested_tree(&mut doc);
    doc.add_listener(outer, EventKind::MouseDown, "on_outer", OWNER);
    doc.detach(th);

    let hits = dispatch(&doc, &PointerEvent::at(EventKind::MouseDown, 0.0, 0.0, handle));
    assert!(hits.is_empty(), "detached parent chain stops at the break");
}

// ============================================================================
// Document-Level Listeners
// ============================================================================

#[test]
fn test_document_listeners_fire_last_for_any_target() {
    let mut doc = Document::new();
    let (_, _, handle) = nested_tree(&mut doc);
    doc.add_listener(handle, EventKind::MouseMove, "on_node", OWNER);
    doc.add_document_listener(EventKind::MouseMove, "on_doc", OWNER);

    // Targeted event: node listener first, document listener after.
    let hits = dispatch(&doc, &PointerEvent::at(EventKind::MouseMove, 1.0, 1.0, handle));
    let methods: Vec<&str> = hits.iter().map(|i| i.method.as_str()).collect();
    assert_eq!(methods, ["on_node", "on_doc"]);
    assert_eq!(hits[1].current, None);

    // Untargeted event: only the document listener sees it.
    let hits = dispatch(&doc, &PointerEvent::new(EventKind::MouseMove, 9.0, 9.0));
    let methods: Vec<&str> = hits.iter().map(|i| i.method.as_str()).collect();
    assert_eq!(methods, ["on_doc"]);
}

#[test]
fn test_remove_listener_only_drops_exact_registration() {
    let mut doc = Document::new();
    let (_, th, _) = nested_tree(&mut doc);
    doc.add_listener(th, EventKind::MouseOver, "on_over", OWNER);
    doc.add_listener(th, EventKind::MouseOut, "on_out", OWNER);
    doc.add_listener(th, EventKind::MouseOver, "on_over", OWNER + 1);

    doc.remove_listener(th, EventKind::MouseOver, "on_over", OWNER);

    let over = dispatch(&doc, &PointerEvent::at(EventKind::MouseOver, 0.0, 0.0, th));
    assert_eq!(over.len(), 1);
    assert_eq!(over[0].owner, OWNER + 1, "other owner's listener survives");
    let out = dispatch(&doc, &PointerEvent::at(EventKind::MouseOut, 0.0, 0.0, th));
    assert_eq!(out.len(), 1, "other kind survives");
}

#[test]
fn test_remove_document_listener() {
    let mut doc = Document::new();
    doc.add_document_listener(EventKind::MouseMove, "on_move", OWNER);
    doc.add_document_listener(EventKind::MouseUp, "on_up", OWNER);

    doc.remove_document_listener(EventKind::MouseMove, "on_move", OWNER);
    // Removing something never registered is a no-op.
    doc.remove_document_listener(EventKind::MouseMove, "on_move", OWNER);

    assert!(dispatch(&doc, &PointerEvent::new(EventKind::MouseMove, 0.0, 0.0)).is_empty());
    assert_eq!(doc.document_listeners().len(), 1);
}
