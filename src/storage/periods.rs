//! Period store
//!
//! Durable home of every [`MonthlyRecord`], one entry per period. Always reads
//! and writes whole records.

use std::sync::Arc;

use tracing::debug;

use super::backend::KeyValueBackend;
use super::keys;
use crate::error::{DimeError, DimeResult};
use crate::models::{MonthlyRecord, Period};

/// Repository of monthly records
#[derive(Debug, Clone)]
pub struct PeriodStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl PeriodStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Read the record for a period
    ///
    /// `Ok(None)` means nothing was ever written for the period. A value that
    /// exists but does not parse is a `CorruptRecord` error, so that callers
    /// never mistake damaged data for an empty month and overwrite it.
    pub fn get(&self, period: Period) -> DimeResult<Option<MonthlyRecord>> {
        let key = keys::encode(period);
        let Some(raw) = self.backend.read(&key)? else {
            debug!(%period, key = %key, "no record stored");
            return Ok(None);
        };

        let record: MonthlyRecord =
            serde_json::from_str(&raw).map_err(|e| DimeError::corrupt(&key, e))?;
        debug!(%period, key = %key, expenses = record.expenses.len(), "loaded record");
        Ok(Some(record))
    }

    /// Read the record for a period, treating absence as an empty month
    pub fn get_or_default(&self, period: Period) -> DimeResult<MonthlyRecord> {
        Ok(self.get(period)?.unwrap_or_default())
    }

    /// Replace the record for a period
    pub fn put(&self, period: Period, record: &MonthlyRecord) -> DimeResult<()> {
        let key = keys::encode(period);
        let json = serde_json::to_string(record)?;
        self.backend.write(&key, &json)?;
        debug!(%period, key = %key, expenses = record.expenses.len(), "saved record");
        Ok(())
    }

    /// Every period that has a stored record, oldest first
    pub fn list_periods(&self) -> DimeResult<Vec<Period>> {
        let mut periods: Vec<Period> = self
            .backend
            .keys()?
            .iter()
            .filter_map(|key| keys::decode(key))
            .collect();
        periods.sort();
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money, NewExpense};
    use crate::storage::{FileBackend, MemoryBackend};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    fn sample_record() -> MonthlyRecord {
        let expenses = vec![
            Expense::new(
                NewExpense::new(
                    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                    Category::Food,
                    Money::from_cents(1250),
                )
                .with_remarks("groceries"),
            ),
            Expense::new(NewExpense::new(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                Category::Housing,
                Money::from_cents(95000),
            )),
        ];
        MonthlyRecord::new(expenses, Money::from_cents(300000))
    }

    #[test]
    fn test_absent_period() {
        let store = PeriodStore::new(Arc::new(MemoryBackend::new()));
        assert_eq!(store.get(period(2024, 5)).unwrap(), None);
        assert_eq!(
            store.get_or_default(period(2024, 5)).unwrap(),
            MonthlyRecord::default()
        );
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let store = PeriodStore::new(Arc::new(MemoryBackend::new()));
        let record = sample_record();

        store.put(period(2024, 5), &record).unwrap();

        assert_eq!(store.get(period(2024, 5)).unwrap(), Some(record));
        assert_eq!(store.get(period(2024, 6)).unwrap(), None);
    }

    #[test]
    fn test_round_trip_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let record = sample_record();

        {
            let backend = FileBackend::new(temp_dir.path().to_path_buf()).unwrap();
            PeriodStore::new(Arc::new(backend))
                .put(period(2024, 5), &record)
                .unwrap();
        }

        let backend = FileBackend::new(temp_dir.path().to_path_buf()).unwrap();
        let store = PeriodStore::new(Arc::new(backend));
        assert_eq!(store.get(period(2024, 5)).unwrap(), Some(record));
    }

    #[test]
    fn test_put_replaces_whole_record() {
        let store = PeriodStore::new(Arc::new(MemoryBackend::new()));
        store.put(period(2024, 5), &sample_record()).unwrap();

        let replacement = MonthlyRecord::new(vec![], Money::from_cents(100));
        store.put(period(2024, 5), &replacement).unwrap();

        assert_eq!(store.get(period(2024, 5)).unwrap(), Some(replacement));
    }

    #[test]
    fn test_corrupt_value_is_not_absent() {
        let backend = MemoryBackend::with_values([("coins_2024_5", "{ definitely not json")]);
        let store = PeriodStore::new(Arc::new(backend));

        let err = store.get(period(2024, 5)).unwrap_err();
        assert!(err.is_corrupt());
        assert!(store.get_or_default(period(2024, 5)).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_unknown_category_is_corrupt() {
        let raw = r#"{"expenses":[{"id":"550e8400-e29b-41d4-a716-446655440000","date":"2024-06-01","category":"Pets","amount":3,"remarks":"","createdAt":0}],"salary":0}"#;
        let backend = MemoryBackend::with_values([("coins_2024_5", raw)]);
        let store = PeriodStore::new(Arc::new(backend));

        assert!(store.get(period(2024, 5)).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let backend = Arc::new(MemoryBackend::new());
        backend.fail_after_writes(0).unwrap();
        let store = PeriodStore::new(backend);

        let err = store.put(period(2024, 5), &sample_record()).unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_list_periods() {
        let backend = MemoryBackend::with_values([
            ("coins_2024_1", "{}"),
            ("coins_2023_11", "{}"),
            ("dime_currency", "{}"),
        ]);
        let store = PeriodStore::new(Arc::new(backend));

        assert_eq!(
            store.list_periods().unwrap(),
            vec![period(2023, 11), period(2024, 1)]
        );
    }
}
