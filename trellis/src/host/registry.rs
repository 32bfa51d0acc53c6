//! Component registry and definitions.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::enhancer::EnhancerChain;

/// Name the host's table widget is registered under.
pub const TABLE_COMPONENT: &str = "DataTable";

/// Failure to instantiate a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("component '{0}' is not registered")]
    NotRegistered(String),
}

/// A registered component type: the stock widget plus whatever enhancer
/// chain has been layered onto it.
///
/// The stock widget's own behavior (rendering, its hover notifications)
/// belongs to the host framework and is not modeled here; a stock
/// definition simply carries an empty chain.
#[derive(Debug, Clone, Default)]
pub struct ComponentDef {
    chain: EnhancerChain,
}

impl ComponentDef {
    /// The widget as the host ships it, with no enhancers.
    pub fn stock() -> Self {
        Self::default()
    }

    /// A new definition with `chain` merged after this one's. The original
    /// definition is left untouched so re-registration stays explicit.
    pub fn extend(&self, chain: EnhancerChain) -> ComponentDef {
        let mut merged = self.chain.clone();
        merged.merge(chain);
        ComponentDef { chain: merged }
    }

    pub fn chain(&self) -> &EnhancerChain {
        &self.chain
    }
}

/// Name to component-type mapping, as the host framework keeps it.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDef>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under `name`, replacing any previous definition.
    /// Instances spawned before the replacement keep the chain they were
    /// built with.
    pub fn register(&mut self, name: &str, def: ComponentDef) {
        if self.components.insert(name.to_string(), def).is_some() {
            debug!("[registry] component '{name}' re-registered");
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDef> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }
}
