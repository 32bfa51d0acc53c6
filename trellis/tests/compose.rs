use std::cell::RefCell;

use hostdom::{EventKind, PointerEvent};
use trellis::combine;
use trellis::enhancer::{Enhancer, EnhancerState, EventPayload, PropDef, Props, TableCtx};
use trellis::host::{ComponentDef, HostRuntime};

// Each test thread gets its own call log.
thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(tag: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(tag));
}

fn calls() -> Vec<&'static str> {
    CALLS.with(|calls| calls.borrow().clone())
}

// ==== Two small enhancers that only log ====

fn first_init(_: &Props, state: &mut EnhancerState) {
    state.resize.min_column_width = 10.0;
    record("first.init");
}
fn first_created(_: &mut TableCtx<'_>) {
    record("first.created");
}
fn first_mounted(_: &mut TableCtx<'_>) {
    record("first.mounted");
}
fn first_destroy(_: &mut TableCtx<'_>) {
    record("first.destroy");
}
fn first_ping(_: &mut TableCtx<'_>, _: &EventPayload) {
    record("first.ping");
}

fn first() -> Enhancer {
    Enhancer {
        props: vec![PropDef {
            name: "flag",
            default: false,
        }],
        init: Some(first_init),
        methods: vec![("ping", first_ping)],
        created: Some(first_created),
        mounted: Some(first_mounted),
        before_destroy: Some(first_destroy),
        ..Default::default()
    }
}

fn second_init(_: &Props, state: &mut EnhancerState) {
    state.resize.min_column_width = 20.0;
    record("second.init");
}
fn second_created(_: &mut TableCtx<'_>) {
    record("second.created");
}
fn second_mounted(_: &mut TableCtx<'_>) {
    record("second.mounted");
}
fn second_destroy(_: &mut TableCtx<'_>) {
    record("second.destroy");
}
fn second_ping(_: &mut TableCtx<'_>, _: &EventPayload) {
    record("second.ping");
}
fn second_pong(_: &mut TableCtx<'_>, _: &EventPayload) {
    record("second.pong");
}

fn second() -> Enhancer {
    Enhancer {
        props: vec![PropDef {
            name: "flag",
            default: true,
        }],
        init: Some(second_init),
        methods: vec![("ping", second_ping), ("pong", second_pong)],
        created: Some(second_created),
        mounted: Some(second_mounted),
        before_destroy: Some(second_destroy),
        ..Default::default()
    }
}

fn spawn_combined(host: &mut HostRuntime) -> trellis::host::InstanceId {
    host.components.register(
        "Widget",
        ComponentDef::stock().extend(combine([first(), second()])),
    );
    let root = host.doc.create_element("div");
    host.spawn("Widget", root, vec![], &[]).unwrap()
}

// ============================================================================
// Hook and Initializer Ordering
// ============================================================================

#[test]
fn test_hooks_run_in_combination_order_exactly_once() {
    let mut host = HostRuntime::new();
    let id = spawn_combined(&mut host);
    host.destroy(id);

    assert_eq!(
        calls(),
        [
            "first.init",
            "second.init",
            "first.created",
            "second.created",
            "first.mounted",
            "second.mounted",
            "first.destroy",
            "second.destroy",
        ]
    );
}

#[test]
fn test_init_collision_later_value_survives() {
    let mut host = HostRuntime::new();
    let id = spawn_combined(&mut host);

    let state = &host.instance(id).unwrap().state;
    assert_eq!(state.resize.min_column_width, 20.0);
}

// ============================================================================
// Method Table Collisions
// ============================================================================

#[test]
fn test_later_method_definition_wins() {
    let mut host = HostRuntime::new();
    let id = spawn_combined(&mut host);

    let el = host.doc.create_element("div");
    host.doc.append_child(host.doc.body(), el);
    host.doc.add_listener(el, EventKind::MouseDown, "ping", id.owner());
    host.doc.add_listener(el, EventKind::MouseUp, "pong", id.owner());

    host.dispatch(PointerEvent::at(EventKind::MouseDown, 0.0, 0.0, el));
    host.dispatch(PointerEvent::at(EventKind::MouseUp, 0.0, 0.0, el));

    let calls = calls();
    assert!(calls.contains(&"second.ping"), "later definition runs");
    assert!(!calls.contains(&"first.ping"), "shadowed definition never runs");
    assert!(calls.contains(&"second.pong"), "non-colliding names all survive");
}

// ============================================================================
// Prop Merging
// ============================================================================

#[test]
fn test_prop_redeclaration_keeps_one_def_with_later_default() {
    let chain = combine([first(), second()]);

    assert_eq!(chain.props.len(), 1);
    assert_eq!(chain.props[0].name, "flag");
    assert!(chain.props[0].default, "later declaration's default wins");

    let mut host = HostRuntime::new();
    let id = spawn_combined(&mut host);
    assert!(host.instance(id).unwrap().prop("flag"));
}

#[test]
fn test_prop_override_beats_merged_default() {
    let mut host = HostRuntime::new();
    host.components.register(
        "Widget",
        ComponentDef::stock().extend(combine([first(), second()])),
    );
    let root = host.doc.create_element("div");
    let id = host.spawn("Widget", root, vec![], &[("flag", false)]).unwrap();

    assert!(!host.instance(id).unwrap().prop("flag"));
}

// ============================================================================
// Extension Semantics
// ============================================================================

#[test]
fn test_extend_builds_new_def_and_leaves_base_alone() {
    let stock = ComponentDef::stock();
    let enhanced = stock.extend(combine([first()]));

    assert!(stock.chain().methods.is_empty());
    assert!(stock.chain().mounted.is_empty());
    assert_eq!(enhanced.chain().methods.len(), 1);
    assert_eq!(enhanced.chain().mounted.len(), 1);
    assert_eq!(enhanced.chain().props.len(), 1);
}

#[test]
fn test_stock_widget_spawns_inert() {
    let mut host = HostRuntime::new();
    host.components.register("Widget", ComponentDef::stock());
    let root = host.doc.create_element("div");

    let id = host.spawn("Widget", root, vec![], &[]).unwrap();
    host.update(id);
    host.destroy(id);

    assert!(calls().is_empty(), "no enhancers, no hook calls");
}

// ============================================================================
// Deferred Ticks
// ============================================================================

fn deferred_updated(ctx: &mut TableCtx<'_>) {
    record("deferred.updated");
    ctx.instance.next_tick(|ctx| {
        record("deferred.tick");
        ctx.instance.next_tick(|ctx| {
            record("deferred.tick.nested");
            ctx.instance.request_layout();
        });
    });
}

fn deferred() -> Enhancer {
    Enhancer {
        updated: Some(deferred_updated),
        ..Default::default()
    }
}

#[test]
fn test_tick_queued_during_flush_joins_the_flush() {
    let mut host = HostRuntime::new();
    host.components
        .register("Widget", ComponentDef::stock().extend(combine([deferred()])));
    let root = host.doc.create_element("div");
    let id = host.spawn("Widget", root, vec![], &[]).unwrap();
    assert!(calls().is_empty(), "nothing queued before the update");

    host.update(id);

    assert_eq!(
        calls(),
        ["deferred.updated", "deferred.tick", "deferred.tick.nested"]
    );
    let instance = host.instance(id).unwrap();
    assert_eq!(instance.layout_requests(), 1, "nested tick ran in the same flush");
}
