//! Plugin installation.

use log::{debug, error};
use thiserror::Error;

use crate::enhancer::standard_enhancers;
use crate::host::{ComponentRegistry, TABLE_COMPONENT};

/// Why [`install`] could not enhance the table component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// The host application never registered the table widget, so there is
    /// nothing to enhance.
    #[error("table component '{0}' is not registered")]
    MissingComponent(&'static str),
}

/// Layer the standard enhancers onto the host's registered table widget.
///
/// Looks up the stock component, extends it with
/// [`standard_enhancers`], and re-registers the result under the same
/// name. Every table spawned afterwards carries the enhanced behavior;
/// already-running instances are untouched.
///
/// A missing component leaves the registry exactly as it was.
pub fn install(components: &mut ComponentRegistry) -> Result<(), InstallError> {
    let Some(stock) = components.get(TABLE_COMPONENT) else {
        error!("[install] component '{TABLE_COMPONENT}' not found; nothing enhanced");
        return Err(InstallError::MissingComponent(TABLE_COMPONENT));
    };
    let enhanced = stock.extend(standard_enhancers());
    components.register(TABLE_COMPONENT, enhanced);
    debug!("[install] '{TABLE_COMPONENT}' re-registered with standard enhancers");
    Ok(())
}
