//! Legacy layout migration
//!
//! Older installations kept every expense in one flat list and a single
//! salary for all months. This moves that data into one record per period,
//! then deletes the two legacy entries so it never runs again.
//!
//! The migration is not transactional across periods. Each period write is a
//! full overwrite, and the legacy entries are only deleted after every write
//! succeeded, so re-running after a crash converges on the same result.

use std::collections::BTreeMap;

use tracing::{info, warn};

use super::backend::KeyValueBackend;
use super::keys::{LEGACY_EXPENSES_KEY, LEGACY_SALARY_KEY};
use super::periods::PeriodStore;
use crate::error::{DimeError, DimeResult};
use crate::models::{Expense, LegacyV0, Money, MonthlyRecord, Period};

/// What a migration run did
#[derive(Debug, Clone, PartialEq)]
pub enum MigrationOutcome {
    /// No legacy expense list was stored; nothing was touched
    NoLegacyData,
    /// Legacy data was partitioned and the legacy entries removed
    Migrated(MigrationReport),
}

/// Summary of a completed migration
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationReport {
    /// Periods that received a record, oldest first
    pub periods: Vec<Period>,
    /// Number of expenses moved
    pub expense_count: usize,
    /// Salary applied to each migrated period
    pub salary: Money,
}

/// Split a legacy blob into one record per period
///
/// Each period that holds at least one legacy expense gets the legacy salary;
/// periods without legacy expenses get no record at all. Expenses keep their
/// legacy order within a period.
pub fn partition(legacy: LegacyV0) -> Vec<(Period, MonthlyRecord)> {
    let mut grouped: BTreeMap<Period, Vec<Expense>> = BTreeMap::new();
    for expense in legacy.expenses {
        grouped.entry(expense.period()).or_default().push(expense);
    }

    grouped
        .into_iter()
        .map(|(period, expenses)| (period, MonthlyRecord::new(expenses, legacy.salary)))
        .collect()
}

/// Read the legacy entries, if an expense list is present
///
/// A salary entry on its own is not treated as legacy data.
pub fn load_legacy(backend: &dyn KeyValueBackend) -> DimeResult<Option<LegacyV0>> {
    let Some(raw_expenses) = backend.read(LEGACY_EXPENSES_KEY)? else {
        return Ok(None);
    };

    let expenses: Vec<Expense> = serde_json::from_str(&raw_expenses)
        .map_err(|e| DimeError::corrupt(LEGACY_EXPENSES_KEY, e))?;

    let salary = match backend.read(LEGACY_SALARY_KEY)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| DimeError::corrupt(LEGACY_SALARY_KEY, e))?,
        None => Money::zero(),
    };

    Ok(Some(LegacyV0 { expenses, salary }))
}

/// Run the migration against a backend
///
/// On any failure the legacy entries are left in place and the error is
/// returned, so the data can be inspected and the migration retried.
pub fn migrate_legacy(
    backend: &dyn KeyValueBackend,
    periods: &PeriodStore,
) -> DimeResult<MigrationOutcome> {
    let legacy = match load_legacy(backend) {
        Ok(Some(legacy)) => legacy,
        Ok(None) => return Ok(MigrationOutcome::NoLegacyData),
        Err(e) => {
            warn!(error = %e, "legacy migration aborted while reading");
            return Err(e);
        }
    };

    let expense_count = legacy.expenses.len();
    let salary = legacy.salary;
    info!(expense_count, %salary, "migrating legacy expense data");

    let partitioned = partition(legacy);
    let mut migrated = Vec::with_capacity(partitioned.len());
    for (period, record) in &partitioned {
        if let Err(e) = periods.put(*period, record) {
            warn!(%period, error = %e, "legacy migration aborted while writing");
            return Err(e);
        }
        migrated.push(*period);
    }

    // Expense list first: if only the salary were removed, a retry would
    // rewrite every period with a zero salary
    backend.remove(LEGACY_EXPENSES_KEY)?;
    backend.remove(LEGACY_SALARY_KEY)?;

    info!(periods = migrated.len(), "legacy migration completed");
    Ok(MigrationOutcome::Migrated(MigrationReport {
        periods: migrated,
        expense_count,
        salary,
    }))
}
