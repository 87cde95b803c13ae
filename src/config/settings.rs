//! User settings for Dime
//!
//! Display and startup preferences. The currency preference is stored as its
//! own storage entry, not here.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::DimePaths;
use crate::error::DimeError;

/// User settings for Dime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Run the legacy-format migration when storage is opened
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_auto_migrate() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            auto_migrate: default_auto_migrate(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &DimePaths) -> Result<Self, DimeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            DimeError::StorageUnavailable(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| DimeError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that serde accepts but the rest of the app cannot use
    pub fn validate(&self) -> Result<(), DimeError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(DimeError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DimePaths) -> Result<(), DimeError> {
        self.validate()?;

        std::fs::create_dir_all(paths.base_dir()).map_err(|e| {
            DimeError::StorageUnavailable(format!("Failed to create config directory: {}", e))
        })?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DimeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DimeError::StorageUnavailable(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
