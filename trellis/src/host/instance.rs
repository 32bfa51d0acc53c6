//! Per-instance table state.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use hostdom::{NodeId, OwnerId, PointerEvent};

use crate::enhancer::{EnhancerChain, EnhancerState, Props, TableCtx};

/// Unique identifier for a spawned table. Doubles as the listener
/// [`OwnerId`] in the document, which is how the runtime routes an
/// invocation back to the instance that registered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn from_owner(owner: OwnerId) -> Self {
        Self(owner)
    }

    /// The owner tag this instance registers listeners under.
    pub fn owner(self) -> OwnerId {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table#{}", self.0)
    }
}

/// The host's per-column metadata record. The host's layout pass reads
/// these, so width writes into the document must keep them in agreement.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    /// Explicitly assigned width, if any.
    pub width: Option<f64>,
    /// Width the last layout pass actually used.
    pub real_width: f64,
    /// Floor the host's layout respects when distributing free space.
    pub min_width: f64,
}

impl ColumnMeta {
    pub fn new(real_width: f64) -> Self {
        Self {
            width: None,
            real_width,
            min_width: 80.0,
        }
    }
}

/// Cell hover notifications the host widget emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellEvent {
    Enter,
    Leave,
}

/// An application-supplied cell listener. Interceptors run before it, but
/// it always still gets the notification.
pub type CellListener = Box<dyn FnMut(NodeId, &PointerEvent)>;

/// A deferred mutation, run after the current event cycle's writes have
/// flushed.
pub(crate) type Tick = Box<dyn FnOnce(&mut TableCtx<'_>)>;

/// One spawned table.
pub struct TableInstance {
    id: InstanceId,
    pub(crate) chain: Rc<EnhancerChain>,
    props: Props,
    /// Enhancer-owned state.
    pub state: EnhancerState,
    root: NodeId,
    /// Column records, in column order. The host widget fills these from
    /// its column definitions; enhancers read and update them.
    pub columns: Vec<ColumnMeta>,
    interceptors: HashMap<CellEvent, Vec<&'static str>>,
    cell_listeners: HashMap<CellEvent, CellListener>,
    ticks: VecDeque<Tick>,
    layout_requests: u64,
}

impl TableInstance {
    pub(crate) fn new(
        chain: Rc<EnhancerChain>,
        props: Props,
        state: EnhancerState,
        root: NodeId,
        columns: Vec<ColumnMeta>,
    ) -> Self {
        Self {
            id: InstanceId::next(),
            chain,
            props,
            state,
            root,
            columns,
            interceptors: HashMap::new(),
            cell_listeners: HashMap::new(),
            ticks: VecDeque::new(),
            layout_requests: 0,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Root element of this table in the document.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Resolved value of a declared prop.
    pub fn prop(&self, name: &str) -> bool {
        self.props.get(name)
    }

    /// Route `event` through the named method before the application's own
    /// listener. Interceptors run in registration order.
    pub fn intercept(&mut self, event: CellEvent, method: &'static str) {
        self.interceptors.entry(event).or_default().push(method);
    }

    pub(crate) fn interceptors(&self, event: CellEvent) -> &[&'static str] {
        self.interceptors
            .get(&event)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Install the application's listener for `event`, replacing any
    /// previous one.
    pub fn set_cell_listener(&mut self, event: CellEvent, listener: CellListener) {
        self.cell_listeners.insert(event, listener);
    }

    pub(crate) fn notify_cell_listener(
        &mut self,
        event: CellEvent,
        cell: NodeId,
        pointer: &PointerEvent,
    ) {
        if let Some(listener) = self.cell_listeners.get_mut(&event) {
            listener(cell, pointer);
        }
    }

    /// Queue `tick` to run after the current event cycle. Ticks run in
    /// queue order; a tick may queue further ticks, which run in the same
    /// flush.
    pub fn next_tick(&mut self, tick: impl FnOnce(&mut TableCtx<'_>) + 'static) {
        self.ticks.push_back(Box::new(tick));
    }

    pub(crate) fn pop_tick(&mut self) -> Option<Tick> {
        self.ticks.pop_front()
    }

    /// Ask the host to run a fresh layout pass over this table.
    pub fn request_layout(&mut self) {
        self.layout_requests += 1;
        debug!("[host] {} layout requested ({} total)", self.id, self.layout_requests);
    }

    /// How many layout passes have been requested so far.
    pub fn layout_requests(&self) -> u64 {
        self.layout_requests
    }
}
