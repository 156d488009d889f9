use std::fs;
use std::path::Path;

use crate::domain::{AppError, substitute};

/// Rewrite `path` in place with every placeholder replaced by `domain`.
///
/// A missing file is an error. The original content is not kept.
pub fn substitute_file(path: &Path, domain: &str) -> Result<(), AppError> {
    let content = fs::read(path).map_err(AppError::path_io("Failed to read", path))?;
    fs::write(path, substitute(&content, domain))
        .map_err(AppError::path_io("Failed to write", path))?;
    tracing::debug!(path = %path.display(), "Placeholder substituted");
    Ok(())
}
