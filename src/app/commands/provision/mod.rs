//! Virtual host provisioning: one linear, fail-fast run.

mod activate;
mod certificate;
mod ownership;
mod substitute;
mod template;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::confirmation::summary;
use crate::domain::{AppError, VHOST_MODE, VhostConfig};
use crate::ports::{ConfirmationPort, SystemPort};

pub use activate::{activate, create_site_link};
pub use certificate::{merge_tls_fragment, provision_certificate};
pub use ownership::normalize_ownership;
pub use substitute::substitute_file;
pub use template::copy_template;

/// What a completed run left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub destination: PathBuf,
    pub site_link: PathBuf,
    pub certificate_merged: bool,
}

/// Execute the provisioning run.
///
/// Any failure stops the run where it is; files created by earlier steps stay on disk.
pub fn execute<S, C>(
    ctx: &AppContext<S, C>,
    config: &VhostConfig,
) -> Result<ProvisionOutcome, AppError>
where
    S: SystemPort,
    C: ConfirmationPort,
{
    config.validate()?;

    if !ctx.system().is_privileged() {
        return Err(AppError::NotPrivileged);
    }
    let identity = ctx.system().resolve_account(&config.www_user, &config.www_group)?;
    tracing::debug!(uid = identity.uid, gid = identity.gid, "Web-server account resolved");

    if !ctx.confirmation().confirm(&summary(config))? {
        return Err(AppError::Declined);
    }

    let destination = config.destination();
    copy_template(&config.template_dir, &destination)?;

    for path in config.placeholder_files() {
        substitute_file(&path, &config.domain)?;
    }

    activate(ctx.system(), config)?;
    ctx.system().reload_service()?;

    let certificate_merged = provision_certificate(ctx.system(), config)?;

    normalize_ownership(&destination, identity, VHOST_MODE)?;

    Ok(ProvisionOutcome { destination, site_link: config.site_link(), certificate_merged })
}
