//! Atomic file writes.
//!
//! Content lands in a uniquely named temporary file next to the
//! target, is fsynced, and is renamed over the target, so readers
//! observe either the old content or the new content in full.

use penknife_core::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Write `content` to `path` atomically, creating parent directories
/// as needed. On any failure the temporary file is removed and the
/// target is left as it was.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    write_atomic_impl(path, content, None)
}

/// String-content convenience over [`write_atomic`].
pub fn write_atomic_string(path: &Path, content: &str) -> Result<()> {
    write_atomic_impl(path, content.as_bytes(), None)
}

/// Like [`write_atomic`], additionally applying a Unix permission
/// mode to the file before it is moved into place. On non-Unix
/// platforms the mode is ignored.
pub fn write_atomic_with_mode(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    write_atomic_impl(path, content, Some(mode))
}

fn write_atomic_impl(path: &Path, content: &[u8], mode: Option<u32>) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::configuration("invalid file path: no parent directory".to_string()))?;
    fs::create_dir_all(parent)
        .map_err(|e| Error::file_system(parent.to_path_buf(), "create parent directory", e))?;

    // The temporary file must live in the same directory as the
    // target for the rename to stay atomic.
    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));

    if let Err(e) = fill_temp_file(&temp_path, content, mode) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::file_system(path.to_path_buf(), "atomic rename", e)
    })?;

    log::debug!("atomically wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn fill_temp_file(temp_path: &Path, content: &[u8], mode: Option<u32>) -> Result<()> {
    let mut file = File::create(temp_path)
        .map_err(|e| Error::file_system(temp_path, "create temporary file", e))?;

    file.write_all(content)
        .map_err(|e| Error::file_system(temp_path, "write to temporary file", e))?;
    file.sync_all()
        .map_err(|e| Error::file_system(temp_path, "sync temporary file", e))?;

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp_path, fs::Permissions::from_mode(mode))
            .map_err(|e| Error::file_system(temp_path, "set permissions", e))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}
