//! In-memory storage backend
//!
//! Provides [`MemoryBackend`], a thread-safe map that implements
//! [`KeyValueBackend`] without touching the filesystem. Ideal for tests and
//! for throwaway sessions.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::backend::KeyValueBackend;
use crate::error::{DimeError, DimeResult};

#[derive(Debug, Default)]
struct Inner {
    values: BTreeMap<String, String>,
    /// Successful writes allowed before every write fails; `None` = unlimited
    write_budget: Option<usize>,
}

/// Thread-safe in-memory key-value storage
#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend pre-populated with raw values
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Mutex::new(Inner {
                values,
                write_budget: None,
            }),
        }
    }

    /// Simulate storage going away: after `writes` more successful writes or
    /// removals, every further one fails with `StorageUnavailable`
    pub fn fail_after_writes(&self, writes: usize) -> DimeResult<()> {
        self.lock()?.write_budget = Some(writes);
        Ok(())
    }

    fn lock(&self) -> DimeResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| DimeError::StorageUnavailable(format!("Storage lock poisoned: {}", e)))
    }
}

impl Inner {
    fn spend_write(&mut self) -> DimeResult<()> {
        match self.write_budget {
            Some(0) => Err(DimeError::StorageUnavailable(
                "Simulated storage failure".into(),
            )),
            Some(ref mut remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> DimeResult<Option<String>> {
        Ok(self.lock()?.values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> DimeResult<()> {
        let mut inner = self.lock()?;
        inner.spend_write()?;
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DimeResult<()> {
        let mut inner = self.lock()?;
        inner.spend_write()?;
        inner.values.remove(key);
        Ok(())
    }

    fn keys(&self) -> DimeResult<Vec<String>> {
        Ok(self.lock()?.values.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);

        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));

        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }

    #[test]
    fn test_keys_are_sorted() {
        let backend = MemoryBackend::with_values([("b", "1"), ("a", "2")]);
        assert_eq!(backend.keys().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_fail_after_writes() {
        let backend = MemoryBackend::new();
        backend.fail_after_writes(1).unwrap();

        backend.write("first", "ok").unwrap();
        let err = backend.write("second", "nope").unwrap_err();
        assert!(err.is_storage_unavailable());
        assert_eq!(backend.read("second").unwrap(), None);
        assert!(backend.remove("first").is_err());
    }
}
