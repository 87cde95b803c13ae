//! Path management for Dime
//!
//! ## Path Resolution Order
//!
//! 1. `DIME_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/dime` on Linux, `~/Library/Application Support/dime` on macOS,
//!    `%APPDATA%\dime` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DimeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DIME_DATA_DIR";

/// Manages all paths used by Dime
#[derive(Debug, Clone)]
pub struct DimePaths {
    /// Base directory for all Dime data
    base_dir: PathBuf,
}

impl DimePaths {
    /// Create a new DimePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, DimeError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DimePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DimeError> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            DimeError::StorageUnavailable(format!("Failed to create data directory: {}", e))
        })?;
        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, DimeError> {
    ProjectDirs::from("", "", "dime")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DimeError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DimePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DimePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
