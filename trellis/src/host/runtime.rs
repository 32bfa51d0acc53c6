//! The host runtime: owns the document and the live table instances, and
//! bridges between them.
//!
//! Event routing uses the method names carried by listener registrations:
//! the document's dispatch returns (owner, method) pairs, and the runtime
//! resolves each against the owning instance's enhancer chain. Unknown
//! owners and unknown method names are skipped, so listeners left behind
//! by application code can never panic the router.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

use hostdom::{Document, NodeId, PointerEvent};

use crate::enhancer::{EnhancerChain, EnhancerState, EventPayload, HookFn, Props, TableCtx};

use super::instance::{CellEvent, ColumnMeta, InstanceId, TableInstance};
use super::registry::{ComponentRegistry, SpawnError};

pub struct HostRuntime {
    pub doc: Document,
    pub components: ComponentRegistry,
    instances: HashMap<InstanceId, TableInstance>,
}

impl HostRuntime {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            components: ComponentRegistry::new(),
            instances: HashMap::new(),
        }
    }

    pub fn instance(&self, id: InstanceId) -> Option<&TableInstance> {
        self.instances.get(&id)
    }

    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut TableInstance> {
        self.instances.get_mut(&id)
    }

    fn chain(&self, id: InstanceId) -> Option<Rc<EnhancerChain>> {
        self.instances.get(&id).map(|i| Rc::clone(&i.chain))
    }

    // ==== Lifecycle ====

    /// Instantiate the component registered under `name` on the rendered
    /// subtree at `root`.
    ///
    /// Runs the chain's initializers over fresh state, then the `created`
    /// and `mounted` hooks, then flushes any ticks they queued.
    pub fn spawn(
        &mut self,
        name: &str,
        root: NodeId,
        columns: Vec<ColumnMeta>,
        overrides: &[(&str, bool)],
    ) -> Result<InstanceId, SpawnError> {
        let Some(def) = self.components.get(name) else {
            return Err(SpawnError::NotRegistered(name.to_string()));
        };
        let chain = Rc::new(def.chain().clone());
        let props = Props::resolve(&chain.props, overrides);
        let mut state = EnhancerState::default();
        for init in &chain.inits {
            init(&props, &mut state);
        }
        let instance = TableInstance::new(Rc::clone(&chain), props, state, root, columns);
        let id = instance.id();
        debug!("[host] spawned '{name}' as {id} at {root}");
        self.instances.insert(id, instance);
        self.call_hooks(id, &chain.created);
        self.call_hooks(id, &chain.mounted);
        self.flush_ticks(id);
        Ok(id)
    }

    /// Tell an instance its subtree re-rendered. Runs the `updated` hooks
    /// and flushes their ticks.
    pub fn update(&mut self, id: InstanceId) {
        let Some(chain) = self.chain(id) else {
            warn!("[host] update of unknown instance {id}");
            return;
        };
        self.call_hooks(id, &chain.updated);
        self.flush_ticks(id);
    }

    /// Tear an instance down: `before_destroy` hooks run with the document
    /// still available, then the instance is dropped.
    pub fn destroy(&mut self, id: InstanceId) {
        let Some(chain) = self.chain(id) else {
            warn!("[host] destroy of unknown instance {id}");
            return;
        };
        self.call_hooks(id, &chain.before_destroy);
        self.instances.remove(&id);
        debug!("[host] destroyed {id}");
    }

    fn call_hooks(&mut self, id: InstanceId, hooks: &[HookFn]) {
        for &hook in hooks {
            let Some(instance) = self.instances.get_mut(&id) else {
                return;
            };
            let mut ctx = TableCtx {
                doc: &mut self.doc,
                instance,
            };
            hook(&mut ctx);
        }
    }

    // ==== Event routing ====

    /// Route a pointer event through the document and run every matched
    /// method, then flush the ticks the batch queued.
    pub fn dispatch(&mut self, event: PointerEvent) {
        let invocations = hostdom::dispatch(&self.doc, &event);
        let mut touched: Vec<InstanceId> = Vec::new();
        for invocation in invocations {
            let id = InstanceId::from_owner(invocation.owner);
            let Some(instance) = self.instances.get_mut(&id) else {
                continue;
            };
            let chain = Rc::clone(&instance.chain);
            let Some(method) = chain.method(&invocation.method) else {
                warn!("[host] {id} has no method '{}'", invocation.method);
                continue;
            };
            let payload = EventPayload::Pointer(invocation.event);
            let mut ctx = TableCtx {
                doc: &mut self.doc,
                instance,
            };
            method(&mut ctx, &payload);
            if !touched.contains(&id) {
                touched.push(id);
            }
        }
        for id in touched {
            self.flush_ticks(id);
        }
    }

    /// Deliver a cell hover notification from the host widget: interceptors
    /// first, in registration order, then the application's own listener.
    pub fn emit_cell(
        &mut self,
        id: InstanceId,
        event: CellEvent,
        cell: NodeId,
        pointer: PointerEvent,
    ) {
        let Some(instance) = self.instances.get_mut(&id) else {
            warn!("[host] cell event for unknown instance {id}");
            return;
        };
        let chain = Rc::clone(&instance.chain);
        let names = instance.interceptors(event).to_vec();
        let payload = EventPayload::Cell { cell, pointer };
        for name in names {
            let Some(method) = chain.method(name) else {
                warn!("[host] {id} intercepts '{name}' but no such method");
                continue;
            };
            let mut ctx = TableCtx {
                doc: &mut self.doc,
                instance: &mut *instance,
            };
            method(&mut ctx, &payload);
        }
        instance.notify_cell_listener(event, cell, &pointer);
        self.flush_ticks(id);
    }

    fn flush_ticks(&mut self, id: InstanceId) {
        loop {
            let Some(instance) = self.instances.get_mut(&id) else {
                return;
            };
            let Some(tick) = instance.pop_tick() else {
                return;
            };
            let mut ctx = TableCtx {
                doc: &mut self.doc,
                instance,
            };
            tick(&mut ctx);
        }
    }
}

impl Default for HostRuntime {
    fn default() -> Self {
        Self::new()
    }
}
