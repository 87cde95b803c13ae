//! Pluggable key-value persistence
//!
//! Every piece of durable state is a JSON document stored under a string key.
//! Backends only move text; typed stores on top of them own the schema.

use std::fmt;

use crate::error::DimeResult;

/// A durable string-to-string map
///
/// `read` must distinguish "no value under this key" (`Ok(None)`) from "the
/// value could not be read" (`Err`). Writes replace the whole value.
pub trait KeyValueBackend: fmt::Debug + Send + Sync {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> DimeResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> DimeResult<()>;

    /// Delete the value under `key`; removing a missing key succeeds
    fn remove(&self, key: &str) -> DimeResult<()>;

    /// All keys currently holding a value
    fn keys(&self) -> DimeResult<Vec<String>>;

    /// Check whether a value exists under `key`
    fn contains(&self, key: &str) -> DimeResult<bool> {
        Ok(self.read(key)?.is_some())
    }
}
