use std::fs::{self, Permissions};
use std::os::unix::fs::{PermissionsExt, chown};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Identity};

/// Hand `dir` and each of its direct entries to `identity` with `mode`.
///
/// Only one level is enumerated; contents of subdirectories keep what the copy gave them.
/// Returns the number of paths changed.
pub fn normalize_ownership(dir: &Path, identity: Identity, mode: u32) -> Result<usize, AppError> {
    let mut paths: Vec<PathBuf> = vec![dir.to_path_buf()];
    let entries = fs::read_dir(dir)
        .map_err(|source| AppError::DirectoryRead { path: dir.to_path_buf(), source })?;
    for entry in entries {
        let entry =
            entry.map_err(|source| AppError::DirectoryRead { path: dir.to_path_buf(), source })?;
        paths.push(entry.path());
    }

    for path in &paths {
        chown(path, Some(identity.uid), Some(identity.gid))
            .map_err(AppError::path_io("Failed to change owner of", path))?;
        fs::set_permissions(path, Permissions::from_mode(mode))
            .map_err(AppError::path_io("Failed to change mode of", path))?;
    }

    tracing::info!(
        directory = %dir.display(),
        uid = identity.uid,
        gid = identity.gid,
        mode = %format!("{:o}", mode),
        entries = paths.len(),
        "Ownership normalized"
    );
    Ok(paths.len())
}
