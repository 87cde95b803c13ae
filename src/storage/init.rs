//! Storage initialization
//!
//! Opens storage for a session and brings legacy data up to date.

use tracing::info;

use crate::config::paths::DimePaths;
use crate::config::settings::Settings;
use crate::error::DimeResult;

use super::migration::MigrationOutcome;
use super::Storage;

/// Open storage and run the legacy migration when settings allow it
///
/// A failed migration is returned as an error and leaves the legacy data in
/// place.
pub fn initialize_storage(paths: &DimePaths, settings: &Settings) -> DimeResult<Storage> {
    let storage = Storage::open(paths)?;

    if settings.auto_migrate {
        if let MigrationOutcome::Migrated(report) = storage.migrate_legacy()? {
            info!(
                periods = report.periods.len(),
                expenses = report.expense_count,
                "upgraded legacy data on startup"
            );
        }
    }

    Ok(storage)
}
