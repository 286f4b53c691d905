//! Writing rewritten content back in place
//!
//! The new content goes to a temporary file in the same directory, which is
//! synced and then renamed over the original. A failure at any point leaves
//! the original untouched and the temporary file is removed when dropped.

use crate::error::{FixError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suffix appended to the file name of backups
pub const BACKUP_SUFFIX: &str = ".bak";

pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| FixError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path).map(|m| m.permissions()).ok();

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(contents).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }

    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// `main.go` -> `main.go.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

pub fn backup(path: &Path) -> Result<PathBuf> {
    let target = backup_path(path);
    fs::copy(path, &target).map_err(|source| FixError::Backup {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Backed up {} to {}", path.display(), target.display());
    Ok(target)
}
