use crate::domain::{AppError, Identity};

/// Port for the operating-system and web-server operations a provisioning run needs.
pub trait SystemPort {
    /// Whether the process runs with administrator privilege.
    fn is_privileged(&self) -> bool;

    /// Resolve the numeric uid of `user` and gid of `group`.
    fn resolve_account(&self, user: &str, group: &str) -> Result<Identity, AppError>;

    /// Run the web server's site-enable helper for `domain`.
    fn enable_site(&self, domain: &str) -> Result<(), AppError>;

    /// Reload the web server so configuration changes take effect.
    fn reload_service(&self) -> Result<(), AppError>;

    /// Ask the ACME client for a certificate covering `domain`.
    ///
    /// Success means the request was accepted, not that a certificate was issued.
    fn request_certificate(&self, domain: &str) -> Result<(), AppError>;
}
