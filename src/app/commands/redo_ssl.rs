use crate::domain::{AppError, VhostConfig};

/// Re-run certificate provisioning for an existing vhost.
///
/// Recognised on the command line but not implemented.
pub fn execute(config: &VhostConfig) -> Result<(), AppError> {
    tracing::warn!(domain = %config.domain, "redo-ssl requested");
    Err(AppError::Unsupported("redo-ssl"))
}
