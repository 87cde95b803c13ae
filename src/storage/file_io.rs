//! File I/O utilities with atomic writes
//!
//! Provides file operations that won't leave a half-written value behind.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::DimeError;

/// Read a whole file as text, returning `None` if it doesn't exist
///
/// Any failure other than "not found" is reported as unavailable storage,
/// never as absence.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, DimeError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DimeError::StorageUnavailable(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), DimeError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DimeError::StorageUnavailable(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let mut file = File::create(&temp_path).map_err(|e| {
        DimeError::StorageUnavailable(format!("Failed to create temp file: {}", e))
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| DimeError::StorageUnavailable(format!("Failed to write data: {}", e)))?;

    file.sync_all()
        .map_err(|e| DimeError::StorageUnavailable(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DimeError::StorageUnavailable(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Delete a file; deleting a file that is already gone succeeds
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> Result<(), DimeError> {
    let path = path.as_ref();

    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DimeError::StorageUnavailable(format!(
            "Failed to remove {}: {}",
            path.display(),
            e
        ))),
    }
}
