pub mod config;
pub mod confirmation;
pub mod error;
pub mod identity;
pub mod placeholder;

pub use config::{VHOST_MODE, VhostConfig, validate_domain};
pub use error::{AppError, exit_code};
pub use identity::Identity;
pub use placeholder::{PLACEHOLDER, substitute};
