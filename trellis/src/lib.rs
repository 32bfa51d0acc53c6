//! Table enhancers for a host UI framework: hover row/column highlighting
//! and mouse-drag column resizing, layered onto the host's stock table
//! widget without forking it.
//!
//! The crate is organized the way the behavior composes:
//!
//! - [`enhancer`]: the [`Enhancer`] unit and the [`combine`] composer that
//!   merges several into one [`EnhancerChain`].
//! - [`highlight`] and [`resize`]: the two standard enhancers.
//! - [`install`]: rewrites the host's component registry so every table
//!   spawned afterwards carries the standard chain.
//! - [`host`]: the host framework's side (registry, instances, the
//!   [`HostRuntime`] event router) that the enhancers plug into.
//! - [`class`]: the class-name contract with the stylesheet.
//!
//! ```
//! use trellis::host::{ComponentDef, HostRuntime, TABLE_COMPONENT};
//!
//! let mut host = HostRuntime::new();
//! host.components.register(TABLE_COMPONENT, ComponentDef::stock());
//! trellis::install(&mut host.components).unwrap();
//! // Tables spawned from here on highlight and resize.
//! ```

pub mod class;
pub mod enhancer;
pub mod highlight;
pub mod host;
pub mod install;
pub mod resize;

pub use enhancer::{combine, standard_enhancers, Enhancer, EnhancerChain, EventPayload, TableCtx};
pub use host::HostRuntime;
pub use install::{install, InstallError};
