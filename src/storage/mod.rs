//! Storage layer for Dime
//!
//! A [`KeyValueBackend`] moves JSON text under string keys. Typed stores sit
//! on top of it: [`PeriodStore`] for monthly records and [`CurrencyStore`]
//! for the display currency. [`Storage`] wires them to one shared backend.

pub mod backend;
pub mod file;
pub mod file_io;
pub mod init;
pub mod keys;
pub mod memory;
pub mod migration;
pub mod periods;
pub mod preferences;

pub use backend::KeyValueBackend;
pub use file::FileBackend;
pub use init::initialize_storage;
pub use memory::MemoryBackend;
pub use migration::{MigrationOutcome, MigrationReport};
pub use periods::PeriodStore;
pub use preferences::CurrencyStore;

use std::sync::Arc;

use crate::config::paths::DimePaths;
use crate::error::DimeResult;

/// Main storage coordinator that provides access to all stores
#[derive(Debug, Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueBackend>,
    pub periods: PeriodStore,
    pub currency: CurrencyStore,
}

impl Storage {
    /// Open file-backed storage under the data directory
    pub fn open(paths: &DimePaths) -> DimeResult<Self> {
        paths.ensure_directories()?;
        let backend = FileBackend::new(paths.data_dir())?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Storage that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    pub fn with_backend(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            periods: PeriodStore::new(backend.clone()),
            currency: CurrencyStore::new(backend.clone()),
            backend,
        }
    }

    pub fn backend(&self) -> &dyn KeyValueBackend {
        self.backend.as_ref()
    }

    /// Check whether a legacy expense list is still waiting to be migrated
    pub fn has_legacy_data(&self) -> DimeResult<bool> {
        self.backend.contains(keys::LEGACY_EXPENSES_KEY)
    }

    /// Move legacy data into per-period records
    pub fn migrate_legacy(&self) -> DimeResult<MigrationOutcome> {
        migration::migrate_legacy(self.backend.as_ref(), &self.periods)
    }
}
