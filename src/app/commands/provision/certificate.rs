//! Certificate request and TLS fragment merge.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, VhostConfig};
use crate::ports::SystemPort;

/// Request a certificate and, once it exists, fold the TLS fragment into the primary config.
///
/// Returns whether the merge happened. A certificate that is not there yet is not an error;
/// the fragment is left in place for a later run.
pub fn provision_certificate<S: SystemPort>(
    system: &S,
    config: &VhostConfig,
) -> Result<bool, AppError> {
    system.request_certificate(&config.domain)?;

    let certificate = config.certificate_path();
    if !certificate.exists() {
        tracing::warn!(
            certificate = %certificate.display(),
            "No certificate yet, TLS config not merged"
        );
        return Ok(false);
    }

    let fragment = config.tls_fragment();
    merge_tls_fragment(&config.primary_config(), &fragment)?;
    system.reload_service()?;
    fs::remove_file(&fragment).map_err(AppError::path_io("Failed to remove", &fragment))?;

    tracing::info!(domain = %config.domain, "TLS config merged");
    Ok(true)
}

/// Append the full content of `fragment` to the end of `primary`.
pub fn merge_tls_fragment(primary: &Path, fragment: &Path) -> Result<(), AppError> {
    let tls = fs::read(fragment).map_err(AppError::path_io("Failed to read", fragment))?;

    let mut file = OpenOptions::new()
        .append(true)
        .open(primary)
        .map_err(AppError::path_io("Failed to open", primary))?;
    file.write_all(&tls).map_err(AppError::path_io("Failed to append to", primary))?;
    file.sync_all().map_err(AppError::path_io("Failed to flush", primary))?;
    Ok(())
}
