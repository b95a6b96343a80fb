//! Filesystem helpers: existence checks, directory creation, and raw text
//! file I/O.
//!
//! Two failure styles coexist here, on purpose. The checks and loads are
//! silent/defaulting — any underlying error becomes `false`, `None`, or an
//! empty string, logged at most. The writes propagate: a failed save or
//! directory creation surfaces as an `anyhow::Error` carrying the path.

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Returns `true` iff `path` exists and is a regular file.
///
/// Every stat error (missing path, permission denied, …) is reported as
/// `false`.
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Returns `true` iff `path` exists and is a directory.
///
/// Every stat error is reported as `false`.
#[must_use]
pub fn directory_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Create `path` and any missing parents. No-op when the directory already
/// exists; never overwrites anything.
///
/// # Errors
///
/// Returns an error when the directory tree cannot be created.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if directory_exists(path) {
        return Ok(());
    }

    fs::create_dir_all(path)
        .map_err(|e| anyhow::anyhow!("Failed to create directory {}: {e}", path.display()))
}

/// Metadata for `path` without following symlinks.
///
/// Errors are logged at debug level and reported as `None`.
#[must_use]
pub fn get_stat(path: &Path) -> Option<fs::Metadata> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Some(meta),
        Err(e) => {
            log::debug!("Failed to stat {}: {e}", path.display());
            None
        }
    }
}

/// Write `text` to `path`, creating the parent directory tree first when
/// it is missing.
///
/// # Errors
///
/// Returns an error when the parent directory cannot be created or the
/// write fails.
pub fn save_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, text).map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))
}

/// Read `path` as UTF-8 text.
///
/// A missing or unreadable file yields an empty string; read errors are
/// logged at warn level.
#[must_use]
pub fn load_file(path: &Path) -> String {
    if !file_exists(path) {
        return String::new();
    }

    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to read {}: {e}", path.display());
            String::new()
        }
    }
}

/// Delete `path`, swallowing every error.
///
/// The removal is attempted exactly once; failures are logged at debug
/// level.
pub fn remove_file(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        log::debug!("Failed to remove {}: {e}", path.display());
    }
}
