//! Error types for Dime
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Storage failures and corrupt stored values are kept apart so callers can
//! warn the user instead of overwriting data they could not read.

use thiserror::Error;

/// The main error type for Dime operations
#[derive(Error, Debug)]
pub enum DimeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The underlying persistence could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored value exists but could not be parsed
    #[error("Corrupt record at '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    /// Validation errors for caller-supplied data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Encoding a value for storage failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing a report to its destination failed
    #[error("Export error: {0}")]
    Export(String),
}

impl DimeError {
    /// Create a corrupt-record error for a storage key
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptRecord {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if a stored value failed to parse
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptRecord { .. })
    }

    /// Check if the storage layer itself failed
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

impl From<std::io::Error> for DimeError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for DimeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Dime operations
pub type DimeResult<T> = Result<T, DimeError>;
