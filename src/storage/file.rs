//! JSON-file storage backend
//!
//! Stores each key in its own `<key>.json` file under the data directory.
//!
//! ```text
//! data/
//!   coins_2024_5.json
//!   coins_2024_6.json
//!   dime_currency.json
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::trace;

use super::backend::KeyValueBackend;
use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};
use crate::error::{DimeError, DimeResult};

/// File extension for every stored value
const EXTENSION: &str = "json";

/// File-backed key-value storage
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed
    pub fn new(dir: PathBuf) -> DimeResult<Self> {
        fs::create_dir_all(&dir).map_err(|e| {
            DimeError::StorageUnavailable(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path(&self, key: &str) -> DimeResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DimeError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

impl KeyValueBackend for FileBackend {
    fn read(&self, key: &str) -> DimeResult<Option<String>> {
        let path = self.path(key)?;
        trace!(path = %path.display(), "reading");
        read_text(path)
    }

    fn write(&self, key: &str, value: &str) -> DimeResult<()> {
        let path = self.path(key)?;
        trace!(path = %path.display(), bytes = value.len(), "writing");
        write_text_atomic(path, value)
    }

    fn remove(&self, key: &str) -> DimeResult<()> {
        remove_file_if_exists(self.path(key)?)
    }

    fn keys(&self) -> DimeResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
