use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, VhostConfig};

/// Read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/create-new-vhost/config.toml";

/// Settings accepted in the TOML config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub template_dir: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
    pub htaccess_file: Option<PathBuf>,
    pub sites_available: Option<PathBuf>,
    pub http_conf: Option<String>,
    pub http_ssl_conf: Option<String>,
    pub www_user: Option<String>,
    pub www_group: Option<String>,
    pub site_enable_command: Option<String>,
    pub reload_command: Option<Vec<String>>,
    pub acme_client: Option<String>,
    pub acme_live_dir: Option<PathBuf>,
    pub certificate_file: Option<String>,
}

/// Values given on the command line. These win over the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub template_dir: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
    pub htaccess_file: Option<PathBuf>,
    pub sites_available: Option<PathBuf>,
    pub www_user: Option<String>,
    pub www_group: Option<String>,
}

/// Parse config file content.
pub fn parse_settings(content: &str) -> Result<FileSettings, AppError> {
    toml::from_str(content)
        .map_err(|e| AppError::config_error(format!("Invalid config file: {}", e)))
}

/// Read settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when it exists.
///
/// An explicitly given path must exist; the default one is optional.
pub fn read_settings(path: Option<&Path>) -> Result<FileSettings, AppError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(FileSettings::default());
        }
        Err(e) => {
            return Err(AppError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )));
        }
    };

    tracing::debug!(path = %path.display(), "Loading config file");
    parse_settings(&content).map_err(|e| {
        AppError::config_error(format!("{} ({})", e, path.display()))
    })
}

/// Merge defaults, file settings and overrides into a validated configuration.
pub fn build_config(
    domain: &str,
    settings: FileSettings,
    overrides: Overrides,
) -> Result<VhostConfig, AppError> {
    let mut config = VhostConfig::new(domain);

    set(&mut config.template_dir, overrides.template_dir.or(settings.template_dir));
    set(&mut config.destination_root, overrides.destination_dir.or(settings.destination_dir));
    set(&mut config.htaccess_file, overrides.htaccess_file.or(settings.htaccess_file));
    set(&mut config.sites_available, overrides.sites_available.or(settings.sites_available));
    set(&mut config.www_user, overrides.www_user.or(settings.www_user));
    set(&mut config.www_group, overrides.www_group.or(settings.www_group));
    set(&mut config.http_conf, settings.http_conf);
    set(&mut config.http_ssl_conf, settings.http_ssl_conf);
    set(&mut config.site_enable_command, settings.site_enable_command);
    set(&mut config.reload_command, settings.reload_command);
    set(&mut config.acme_client, settings.acme_client);
    set(&mut config.acme_live_dir, settings.acme_live_dir);
    set(&mut config.certificate_file, settings.certificate_file);

    config.validate()?;
    Ok(config)
}

/// Read the config file and build the run configuration in one step.
pub fn load_config(
    domain: &str,
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<VhostConfig, AppError> {
    let settings = read_settings(config_path)?;
    build_config(domain, settings, overrides)
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
