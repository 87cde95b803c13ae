//! Currency preference persistence
//!
//! Stored independently of period data under its own key.

use std::sync::Arc;

use tracing::debug;

use super::backend::KeyValueBackend;
use super::keys::CURRENCY_KEY;
use crate::error::{DimeError, DimeResult};
use crate::models::Currency;

/// Repository for the display currency
#[derive(Debug, Clone)]
pub struct CurrencyStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl CurrencyStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// The stored preference, if one was ever saved
    pub fn get(&self) -> DimeResult<Option<Currency>> {
        let Some(raw) = self.backend.read(CURRENCY_KEY)? else {
            return Ok(None);
        };
        let currency = serde_json::from_str(&raw).map_err(|e| DimeError::corrupt(CURRENCY_KEY, e))?;
        Ok(Some(currency))
    }

    pub fn put(&self, currency: &Currency) -> DimeResult<()> {
        let json = serde_json::to_string(currency)?;
        self.backend.write(CURRENCY_KEY, &json)?;
        debug!(code = %currency.code, "saved currency preference");
        Ok(())
    }
}
