//! create-new-vhost: provision web-server virtual hosts from a template directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ProvisionOutcome, provision, redo_ssl};
pub use app::config::{FileSettings, Overrides, load_config};
pub use domain::{AppError, VhostConfig};
