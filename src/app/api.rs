//! API Facade for the application.
//!
//! Glues the host adapters to command execution.

use crate::adapters::{HostSystem, TerminalConfirmation};
use crate::app::{
    AppContext,
    commands::{provision, redo_ssl},
};

pub use crate::app::commands::provision::ProvisionOutcome;
pub use crate::domain::{AppError, VhostConfig};

/// Create an `AppContext` talking to the local host and terminal.
fn create_context(config: &VhostConfig) -> AppContext<HostSystem, TerminalConfirmation> {
    AppContext::new(HostSystem::new(config), TerminalConfirmation::new())
}

/// Provision the vhost described by `config` on this host.
pub fn provision(config: &VhostConfig) -> Result<ProvisionOutcome, AppError> {
    let ctx = create_context(config);
    provision::execute(&ctx, config)
}

/// Re-run certificate provisioning for an existing vhost.
pub fn redo_ssl(config: &VhostConfig) -> Result<(), AppError> {
    redo_ssl::execute(config)
}
