//! JSON file load and save.
//!
//! Loading is silent/defaulting: a missing, unreadable, or malformed file
//! yields an empty JSON object and a warn-level log line. Saving propagates
//! every failure, optionally renaming an existing file to `<path>.bak`
//! before the write.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::fs::{ensure_directory_exists, file_exists};

/// Options for [`save_to_json_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    /// Rename an existing target to `<path>.bak` before writing.
    pub backup: bool,
}

/// Load a JSON document from `path`.
///
/// A missing file, a read failure, or malformed JSON all yield an empty
/// object (`{}`); the underlying error is logged at warn level. The caller
/// never sees an `Err`.
#[must_use]
pub fn load_from_json_file(path: &Path) -> Value {
    if !file_exists(path) {
        return Value::Object(Map::new());
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to read JSON file {}: {e}", path.display());
            return Value::Object(Map::new());
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to parse JSON file {}: {e}", path.display());
            Value::Object(Map::new())
        }
    }
}

/// Serialize `data` to `path` as pretty-printed JSON (2-space indentation,
/// trailing newline).
///
/// The parent directory is created when missing. With
/// [`SaveOptions::backup`] set and an existing target, the old file is
/// renamed to `<path>.bak` first (replacing any previous backup).
///
/// # Errors
///
/// Returns an error when the parent directory cannot be created, the backup
/// rename fails, serialization fails, or the write fails.
pub fn save_to_json_file<T: Serialize>(data: &T, path: &Path, opts: &SaveOptions) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    if opts.backup && file_exists(path) {
        let backup = backup_path(path);
        fs::rename(path, &backup).map_err(|e| {
            anyhow::anyhow!(
                "Failed to back up {} to {}: {e}",
                path.display(),
                backup.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| anyhow::anyhow!("Failed to serialize JSON for {}: {e}", path.display()))?;

    fs::write(path, json + "\n")
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))
}

/// `<path>.bak` — the suffix is appended to the full file name, not swapped
/// in for the extension.
fn backup_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".bak");
    PathBuf::from(os)
}
