//! Currency preference service
//!
//! Loaded once when a session starts and saved whenever it changes. The
//! preference is a display label only.

use tracing::info;

use crate::error::{DimeError, DimeResult};
use crate::models::Currency;
use crate::storage::CurrencyStore;

/// The active display currency
#[derive(Debug, Clone)]
pub struct CurrencyPreference {
    store: CurrencyStore,
    current: Currency,
}

impl CurrencyPreference {
    /// Load the stored preference, falling back to the default currency
    pub fn load(store: CurrencyStore) -> DimeResult<Self> {
        let current = store.get()?.unwrap_or_default();
        Ok(Self { store, current })
    }

    pub fn current(&self) -> &Currency {
        &self.current
    }

    /// Change and persist the preference
    pub fn set(&mut self, currency: Currency) -> DimeResult<()> {
        if !currency.is_supported() {
            return Err(DimeError::Validation(format!(
                "Unsupported currency: {}",
                currency.code
            )));
        }

        self.store.put(&currency)?;
        info!(code = %currency.code, "currency preference changed");
        self.current = currency;
        Ok(())
    }

    /// Change the preference by currency code
    pub fn set_code(&mut self, code: &str) -> DimeResult<&Currency> {
        let currency = Currency::find(code)
            .ok_or_else(|| DimeError::Validation(format!("Unsupported currency: {}", code)))?;
        self.set(currency)?;
        Ok(&self.current)
    }
}
