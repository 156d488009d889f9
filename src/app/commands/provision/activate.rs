use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use crate::domain::{AppError, VhostConfig};
use crate::ports::SystemPort;

/// Link the vhost config into sites-available and run the site-enable helper.
pub fn activate<S: SystemPort>(system: &S, config: &VhostConfig) -> Result<(), AppError> {
    create_site_link(&config.primary_config(), &config.site_link())?;
    system.enable_site(&config.domain)?;
    tracing::info!(domain = %config.domain, "Site enabled");
    Ok(())
}

/// Create `link` pointing at the absolute path of `target`.
pub fn create_site_link(target: &Path, link: &Path) -> Result<(), AppError> {
    let target =
        fs::canonicalize(target).map_err(AppError::path_io("Failed to resolve", target))?;
    symlink(&target, link).map_err(AppError::path_io("Failed to create symlink", link))?;
    tracing::debug!(link = %link.display(), target = %target.display(), "Site link created");
    Ok(())
}
