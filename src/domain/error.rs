use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit statuses. Scripts branch on these values, so they must stay stable.
pub mod exit_code {
    pub const FAILURE: i32 = 1;
    pub const UNSUPPORTED: i32 = 3;
    pub const DECLINED: i32 = 5;
    pub const DESTINATION_EXISTS: i32 = 7;
    pub const DIRECTORY_READ: i32 = 8;
    pub const EXTERNAL_COMMAND: i32 = 254;
}

/// Library-wide error type for provisioning operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure without a more specific path context.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure on a specific path.
    #[error("{action} {}: {source}", path.display())]
    PathIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The process does not run with an effective uid of 0.
    #[error("Need to run as root")]
    NotPrivileged,

    /// `--domain` was not given.
    #[error("No domain given!")]
    MissingDomain,

    /// The domain cannot be used as a directory or file name.
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: &'static str },

    /// Configuration file could not be read or parsed.
    #[error("{0}")]
    Configuration(String),

    /// The operator answered anything other than "y".
    #[error("Aborted by user")]
    Declined,

    /// The vhost directory already exists.
    #[error("Virtualhost directory already exists, aborting: {}", .0.display())]
    DestinationExists(PathBuf),

    /// A directory listing could not be read.
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The web-server user or group is unknown to the account database.
    #[error("Unknown {kind} '{name}'")]
    AccountNotFound { kind: &'static str, name: String },

    /// The account database lookup itself failed.
    #[error("Failed to look up {kind} '{name}': {source}")]
    AccountLookup {
        kind: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },

    /// An external helper was not found on PATH or exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    ExternalCommand { command: String, details: String },

    /// A recognised but unimplemented operation.
    #[error("'{0}' is not supported yet")]
    Unsupported(&'static str),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn path_io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| AppError::PathIo { action, path, source }
    }

    /// Exit status reported to the shell for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_)
            | AppError::PathIo { .. }
            | AppError::NotPrivileged
            | AppError::MissingDomain
            | AppError::InvalidDomain { .. }
            | AppError::Configuration(_) => exit_code::FAILURE,
            AppError::Unsupported(_) => exit_code::UNSUPPORTED,
            AppError::Declined => exit_code::DECLINED,
            AppError::DestinationExists(_) => exit_code::DESTINATION_EXISTS,
            AppError::DirectoryRead { .. }
            | AppError::AccountNotFound { .. }
            | AppError::AccountLookup { .. } => exit_code::DIRECTORY_READ,
            AppError::ExternalCommand { .. } => exit_code::EXTERNAL_COMMAND,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::PathIo { source, .. } | AppError::DirectoryRead { source, .. } => {
                source.kind()
            }
            AppError::AccountLookup { source, .. } => source.kind(),
            AppError::NotPrivileged => io::ErrorKind::PermissionDenied,
            AppError::MissingDomain
            | AppError::InvalidDomain { .. }
            | AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
            AppError::AccountNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Declined => io::ErrorKind::Interrupted,
            AppError::Unsupported(_) => io::ErrorKind::Unsupported,
            AppError::ExternalCommand { .. } => io::ErrorKind::Other,
        }
    }
}
