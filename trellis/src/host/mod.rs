//! The host framework's side of the contract: a component registry the
//! installer rewrites, per-instance table state, and the runtime that
//! routes events and lifecycle into enhancer methods.

mod instance;
mod registry;
mod runtime;

pub use instance::{CellEvent, CellListener, ColumnMeta, InstanceId, TableInstance};
pub use registry::{ComponentDef, ComponentRegistry, SpawnError, TABLE_COMPONENT};
pub use runtime::HostRuntime;
