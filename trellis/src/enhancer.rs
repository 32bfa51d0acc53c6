//! Enhancer definitions and the composer that merges them.
//!
//! An [`Enhancer`] is a bundle of table behavior: the input props it
//! declares, a state initializer, named methods for the event router, and
//! lifecycle hooks. [`combine`] merges any number of them into one
//! [`EnhancerChain`] the host registry can layer onto its stock table
//! component. Merging is deliberately boring: props and methods collide by
//! name with the later enhancer winning, while initializers and hooks all
//! run, in the order their enhancers were given.

use std::collections::HashMap;

use log::warn;

use hostdom::{Document, NodeId, PointerEvent};

use crate::host::TableInstance;
use crate::{highlight, resize};

/// Declaration of a boolean input prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropDef {
    pub name: &'static str,
    pub default: bool,
}

/// Resolved prop values for one table instance.
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: HashMap<&'static str, bool>,
}

impl Props {
    /// Overlay per-instance overrides onto the declared defaults.
    /// Overrides naming an undeclared prop are ignored.
    pub fn resolve(defs: &[PropDef], overrides: &[(&str, bool)]) -> Self {
        let mut values: HashMap<&'static str, bool> =
            defs.iter().map(|def| (def.name, def.default)).collect();
        for (name, value) in overrides {
            match defs.iter().find(|def| def.name == *name) {
                Some(def) => {
                    values.insert(def.name, *value);
                }
                None => warn!("[props] override for undeclared prop '{name}' ignored"),
            }
        }
        Self { values }
    }

    /// Value of `name`, or `false` when it was never declared.
    pub fn get(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }
}

/// Mutable state the enhancers keep on each table instance. Spawn starts
/// from the zero value and runs every merged initializer over it.
#[derive(Debug, Default)]
pub struct EnhancerState {
    pub resize: resize::ResizeState,
}

/// What a method or hook gets to work with: the document the table lives
/// in, and the instance that owns the state.
pub struct TableCtx<'a> {
    pub doc: &'a mut Document,
    pub instance: &'a mut TableInstance,
}

/// Payload handed to a method by the event router.
#[derive(Debug, Clone, Copy)]
pub enum EventPayload {
    /// A pointer event routed from the document.
    Pointer(PointerEvent),
    /// A cell hover notification from the host widget.
    Cell { cell: NodeId, pointer: PointerEvent },
}

/// A named method callable by the event router. Methods ignore payloads of
/// the wrong shape rather than erroring.
pub type Method = fn(&mut TableCtx<'_>, &EventPayload);

/// A state initializer, run once at spawn.
pub type InitFn = fn(&Props, &mut EnhancerState);

/// A lifecycle hook.
pub type HookFn = fn(&mut TableCtx<'_>);

/// One behavior bundle, as declared by its module.
#[derive(Debug, Default)]
pub struct Enhancer {
    pub props: Vec<PropDef>,
    pub init: Option<InitFn>,
    pub methods: Vec<(&'static str, Method)>,
    pub created: Option<HookFn>,
    pub mounted: Option<HookFn>,
    pub updated: Option<HookFn>,
    pub before_destroy: Option<HookFn>,
}

/// The merged form of one or more enhancers.
#[derive(Debug, Clone, Default)]
pub struct EnhancerChain {
    /// Declared props, deduplicated by name.
    pub props: Vec<PropDef>,
    /// Every initializer, in enhancer order.
    pub inits: Vec<InitFn>,
    /// Method table; a name maps to the last enhancer that defined it.
    pub methods: HashMap<&'static str, Method>,
    pub created: Vec<HookFn>,
    pub mounted: Vec<HookFn>,
    pub updated: Vec<HookFn>,
    pub before_destroy: Vec<HookFn>,
}

impl EnhancerChain {
    fn push(&mut self, enhancer: Enhancer) {
        for prop in enhancer.props {
            self.declare_prop(prop);
        }
        if let Some(init) = enhancer.init {
            self.inits.push(init);
        }
        for (name, method) in enhancer.methods {
            if self.methods.insert(name, method).is_some() {
                warn!("[combine] method '{name}' redefined; later enhancer wins");
            }
        }
        self.created.extend(enhancer.created);
        self.mounted.extend(enhancer.mounted);
        self.updated.extend(enhancer.updated);
        self.before_destroy.extend(enhancer.before_destroy);
    }

    fn declare_prop(&mut self, prop: PropDef) {
        if let Some(existing) = self.props.iter_mut().find(|p| p.name == prop.name) {
            *existing = prop;
        } else {
            self.props.push(prop);
        }
    }

    /// Append another merged chain after this one, with the same collision
    /// rules as [`combine`].
    pub fn merge(&mut self, other: EnhancerChain) {
        for prop in other.props {
            self.declare_prop(prop);
        }
        self.inits.extend(other.inits);
        for (name, method) in other.methods {
            if self.methods.insert(name, method).is_some() {
                warn!("[combine] method '{name}' redefined; later enhancer wins");
            }
        }
        self.created.extend(other.created);
        self.mounted.extend(other.mounted);
        self.updated.extend(other.updated);
        self.before_destroy.extend(other.before_destroy);
    }

    /// Look up a method by the name listeners registered it under.
    pub fn method(&self, name: &str) -> Option<Method> {
        self.methods.get(name).copied()
    }
}

/// Merge `enhancers` into a single chain, preserving their order.
pub fn combine<I>(enhancers: I) -> EnhancerChain
where
    I: IntoIterator<Item = Enhancer>,
{
    let mut chain = EnhancerChain::default();
    for enhancer in enhancers {
        chain.push(enhancer);
    }
    chain
}

/// The stock chain [`install`](crate::install) applies: column/row hover
/// highlighting, then drag column resizing.
pub fn standard_enhancers() -> EnhancerChain {
    combine([highlight::enhancer(), resize::enhancer()])
}
