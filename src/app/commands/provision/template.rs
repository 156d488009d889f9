//! Template tree materialization.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;

/// Copy the template tree at `template` to `destination`.
///
/// Refuses to touch an existing destination. Symlinks inside the template are followed
/// and their targets copied; file permission bits are kept.
pub fn copy_template(template: &Path, destination: &Path) -> Result<(), AppError> {
    if fs::symlink_metadata(destination).is_ok() {
        return Err(AppError::DestinationExists(destination.to_path_buf()));
    }

    let metadata = fs::metadata(template)
        .map_err(|source| AppError::DirectoryRead { path: template.to_path_buf(), source })?;
    if !metadata.is_dir() {
        return Err(AppError::DirectoryRead {
            path: template.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "template is not a directory"),
        });
    }

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(AppError::path_io("Failed to create", parent))?;
    }
    fs::create_dir(destination).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => AppError::DestinationExists(destination.to_path_buf()),
        _ => AppError::PathIo { action: "Failed to create", path: destination.to_path_buf(), source },
    })?;

    copy_dir_contents(template, destination)?;
    fs::set_permissions(destination, metadata.permissions())
        .map_err(AppError::path_io("Failed to set permissions on", destination))?;

    tracing::info!(
        template = %template.display(),
        destination = %destination.display(),
        "Template copied"
    );
    Ok(())
}

fn copy_dir_contents(from_dir: &Path, to_dir: &Path) -> Result<(), AppError> {
    let entries = fs::read_dir(from_dir)
        .map_err(|source| AppError::DirectoryRead { path: from_dir.to_path_buf(), source })?;

    for entry in entries {
        let entry =
            entry.map_err(|source| AppError::DirectoryRead { path: from_dir.to_path_buf(), source })?;
        let from = entry.path();
        let to = to_dir.join(entry.file_name());
        let metadata = fs::metadata(&from).map_err(AppError::path_io("Failed to read", &from))?;

        if metadata.is_dir() {
            fs::create_dir(&to).map_err(AppError::path_io("Failed to create", &to))?;
            copy_dir_contents(&from, &to)?;
            fs::set_permissions(&to, metadata.permissions())
                .map_err(AppError::path_io("Failed to set permissions on", &to))?;
        } else {
            fs::copy(&from, &to).map_err(AppError::path_io("Failed to copy", &from))?;
        }
    }

    Ok(())
}
