//! Run configuration for a single vhost provisioning.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

pub const DEFAULT_TEMPLATE_DIR: &str = "/etc/create-new-vhost/template-directory";
pub const DEFAULT_HTACCESS_FILE: &str = "/etc/publickeys/authpwd/authpwd";
pub const DEFAULT_DESTINATION_ROOT: &str = "/srv/http/";
pub const DEFAULT_SITES_AVAILABLE: &str = "/etc/apache2/sites-available";
pub const DEFAULT_HTTP_CONF: &str = "http.conf";
pub const DEFAULT_HTTP_SSL_CONF: &str = "http-ssl.conf";
pub const DEFAULT_WWW_USER: &str = "www-data";
pub const DEFAULT_WWW_GROUP: &str = "www-data";
pub const DEFAULT_SITE_ENABLE_COMMAND: &str = "a2ensite";
pub const DEFAULT_RELOAD_COMMAND: [&str; 3] = ["systemctl", "reload", "apache2"];
pub const DEFAULT_ACME_CLIENT: &str = "acmetool";
pub const DEFAULT_ACME_LIVE_DIR: &str = "/var/lib/acme/live";
pub const DEFAULT_CERTIFICATE_FILE: &str = "cert";

/// Mode applied to the vhost directory and its top-level entries.
pub const VHOST_MODE: u32 = 0o775;

/// Immutable settings for one run. Built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VhostConfig {
    pub domain: String,
    pub template_dir: PathBuf,
    pub destination_root: PathBuf,
    /// Accepted for compatibility with existing invocations; nothing reads it.
    pub htaccess_file: PathBuf,
    pub sites_available: PathBuf,
    pub http_conf: String,
    pub http_ssl_conf: String,
    pub www_user: String,
    pub www_group: String,
    pub site_enable_command: String,
    pub reload_command: Vec<String>,
    pub acme_client: String,
    pub acme_live_dir: PathBuf,
    pub certificate_file: String,
}

impl VhostConfig {
    /// Configuration with built-in defaults for everything except the domain.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            destination_root: PathBuf::from(DEFAULT_DESTINATION_ROOT),
            htaccess_file: PathBuf::from(DEFAULT_HTACCESS_FILE),
            sites_available: PathBuf::from(DEFAULT_SITES_AVAILABLE),
            http_conf: DEFAULT_HTTP_CONF.to_string(),
            http_ssl_conf: DEFAULT_HTTP_SSL_CONF.to_string(),
            www_user: DEFAULT_WWW_USER.to_string(),
            www_group: DEFAULT_WWW_GROUP.to_string(),
            site_enable_command: DEFAULT_SITE_ENABLE_COMMAND.to_string(),
            reload_command: DEFAULT_RELOAD_COMMAND.iter().map(|s| s.to_string()).collect(),
            acme_client: DEFAULT_ACME_CLIENT.to_string(),
            acme_live_dir: PathBuf::from(DEFAULT_ACME_LIVE_DIR),
            certificate_file: DEFAULT_CERTIFICATE_FILE.to_string(),
        }
    }

    /// `<destination-root>/<domain>`
    pub fn destination(&self) -> PathBuf {
        self.destination_root.join(&self.domain)
    }

    /// The vhost config the site link points at.
    pub fn primary_config(&self) -> PathBuf {
        self.destination().join(&self.http_conf)
    }

    /// The TLS-only fragment merged into the primary config once a certificate exists.
    pub fn tls_fragment(&self) -> PathBuf {
        self.destination().join(&self.http_ssl_conf)
    }

    /// `<sites-available>/<domain>.conf`
    pub fn site_link(&self) -> PathBuf {
        self.sites_available.join(format!("{}.conf", self.domain))
    }

    /// Certificate the ACME client leaves behind for this domain.
    pub fn certificate_path(&self) -> PathBuf {
        self.acme_live_dir.join(&self.domain).join(&self.certificate_file)
    }

    /// Files in the copied tree that carry the placeholder token.
    pub fn placeholder_files(&self) -> [PathBuf; 2] {
        [self.primary_config(), self.tls_fragment()]
    }

    /// Check every value that ends up in a path or a command line.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_domain(&self.domain)?;
        for (key, name) in [("http_conf", &self.http_conf), ("http_ssl_conf", &self.http_ssl_conf)]
        {
            if !is_plain_file_name(name) {
                return Err(AppError::config_error(format!(
                    "'{}' must be a plain file name, got '{}'",
                    key, name
                )));
            }
        }
        if !is_plain_file_name(&self.certificate_file) {
            return Err(AppError::config_error(format!(
                "'certificate_file' must be a plain file name, got '{}'",
                self.certificate_file
            )));
        }
        if self.reload_command.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(AppError::config_error("'reload_command' must name a program"));
        }
        for (key, value) in [
            ("www_user", &self.www_user),
            ("www_group", &self.www_group),
            ("site_enable_command", &self.site_enable_command),
            ("acme_client", &self.acme_client),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }
}

/// Validates a domain before it is used as a directory name and a symlink name.
///
/// Checks:
/// - Non-empty
/// - No path separators, whitespace or NUL
/// - Not "." or ".."
pub fn validate_domain(domain: &str) -> Result<(), AppError> {
    let reason = if domain.is_empty() {
        Some("must not be empty")
    } else if domain == "." || domain == ".." {
        Some("must not be a relative path component")
    } else if domain.contains('/') || domain.contains('\\') {
        Some("must not contain path separators")
    } else if domain.contains('\0') || domain.chars().any(char::is_whitespace) {
        Some("must not contain whitespace or NUL")
    } else if domain.starts_with('-') {
        Some("must not start with '-'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AppError::InvalidDomain { domain: domain.to_string(), reason }),
        None => Ok(()),
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty()
        && name != "."
        && name != ".."
        && path.file_name().is_some_and(|file_name| file_name == path.as_os_str())
}
