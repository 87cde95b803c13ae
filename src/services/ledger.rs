//! Expense ledger
//!
//! Holds the record of the selected period as working state. Every mutation
//! writes the whole record through the [`PeriodStore`] before the cached copy
//! is replaced, so a failed write leaves both sides as they were.

use tracing::{debug, info};

use crate::error::{DimeError, DimeResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate, Money, MonthlyRecord, NewExpense, Period};
use crate::storage::PeriodStore;

/// Working set for one selected period
#[derive(Debug)]
pub struct ExpenseLedger {
    store: PeriodStore,
    period: Period,
    record: MonthlyRecord,
}

impl ExpenseLedger {
    /// Create a ledger with `period` selected
    pub fn open(store: PeriodStore, period: Period) -> DimeResult<Self> {
        let record = store.get_or_default(period)?;
        Ok(Self {
            store,
            period,
            record,
        })
    }

    /// Load another period into the working set
    ///
    /// On error the previous selection is kept.
    pub fn select_period(&mut self, period: Period) -> DimeResult<()> {
        let record = self.store.get_or_default(period)?;
        info!(%period, expenses = record.expenses.len(), "selected period");
        self.period = period;
        self.record = record;
        Ok(())
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn record(&self) -> &MonthlyRecord {
        &self.record
    }

    /// Expenses of the selected period, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.record.expenses
    }

    pub fn salary(&self) -> Money {
        self.record.salary
    }

    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.record.find(id)
    }

    /// Record a new expense
    ///
    /// The expense lands in the period of its own date. When that is not the
    /// selected period, the other record is read, extended and written back
    /// while the working set stays untouched.
    pub fn add(&mut self, data: NewExpense) -> DimeResult<Expense> {
        data.validate()
            .map_err(|e| DimeError::Validation(e.to_string()))?;

        let expense = Expense::new(data);
        let target = expense.period();

        if target == self.period {
            let mut updated = self.record.clone();
            updated.prepend(expense.clone());
            self.commit(updated)?;
        } else {
            let mut other = self.store.get_or_default(target)?;
            other.prepend(expense.clone());
            self.store.put(target, &other)?;
            debug!(selected = %self.period, %target, "added expense outside selected period");
        }

        Ok(expense)
    }

    /// Merge `update` into an expense of the selected period
    ///
    /// Returns `false` without writing anything if no such expense exists.
    pub fn update(&mut self, id: ExpenseId, update: &ExpenseUpdate) -> DimeResult<bool> {
        let mut updated = self.record.clone();
        let Some(expense) = updated.find_mut(id) else {
            return Ok(false);
        };

        expense.apply(update);
        expense
            .validate()
            .map_err(|e| DimeError::Validation(e.to_string()))?;
        if !self.period.contains(expense.date) {
            return Err(DimeError::Validation(format!(
                "Date {} is outside {}; delete and re-add the expense to move it",
                expense.date, self.period
            )));
        }

        self.commit(updated)?;
        Ok(true)
    }

    /// Remove an expense of the selected period
    ///
    /// Returns the removed expense, or `None` if no such expense exists.
    pub fn delete(&mut self, id: ExpenseId) -> DimeResult<Option<Expense>> {
        let mut updated = self.record.clone();
        let Some(removed) = updated.remove(id) else {
            return Ok(None);
        };

        self.commit(updated)?;
        Ok(Some(removed))
    }

    /// Overwrite the salary of the selected period
    pub fn set_salary(&mut self, amount: Money) -> DimeResult<()> {
        if amount.is_negative() {
            return Err(DimeError::Validation(format!(
                "Salary cannot be negative (got {})",
                amount
            )));
        }
        if amount.exceeds_limit() {
            return Err(DimeError::Validation(format!(
                "Salary is too large (got {})",
                amount
            )));
        }

        let mut updated = self.record.clone();
        updated.salary = amount;
        self.commit(updated)
    }

    fn commit(&mut self, record: MonthlyRecord) -> DimeResult<()> {
        self.store.put(self.period, &record)?;
        self.record = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::{FileBackend, KeyValueBackend, MemoryBackend};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_2024() -> Period {
        Period::new(2024, 5).unwrap()
    }

    fn setup() -> (Arc<MemoryBackend>, PeriodStore, ExpenseLedger) {
        let backend = Arc::new(MemoryBackend::new());
        let store = PeriodStore::new(backend.clone());
        let ledger = ExpenseLedger::open(store.clone(), june_2024()).unwrap();
        (backend, store, ledger)
    }

    fn food(d: NaiveDate, cents: i64) -> NewExpense {
        NewExpense::new(d, Category::Food, Money::from_cents(cents))
    }

    #[test]
    fn test_add_to_selected_period_prepends() {
        let (_, store, mut ledger) = setup();
        let first = ledger.add(food(date(2024, 6, 2), 800)).unwrap();

        let second = ledger.add(food(date(2024, 6, 10), 1250)).unwrap();

        assert_eq!(ledger.expenses().len(), 2);
        assert_eq!(ledger.expenses()[0].id, second.id);
        assert_eq!(ledger.expenses()[1].id, first.id);
        assert_eq!(ledger.expenses()[0].amount.cents(), 1250);

        let stored = store.get(june_2024()).unwrap().unwrap();
        assert_eq!(stored.expenses, ledger.expenses());
    }

    #[test]
    fn test_add_to_other_period_leaves_working_set() {
        let (_, store, mut ledger) = setup();

        let added = ledger
            .add(NewExpense::new(
                date(2024, 7, 1),
                Category::Transport,
                Money::from_cents(3000),
            ))
            .unwrap();

        assert!(ledger.expenses().is_empty());
        assert_eq!(store.get(june_2024()).unwrap(), None);

        let july = store.get(Period::new(2024, 6).unwrap()).unwrap().unwrap();
        assert_eq!(july.expenses, vec![added]);
        assert!(july.salary.is_zero());
    }

    #[test]
    fn test_add_to_other_period_keeps_its_data() {
        let (backend, store, mut ledger) = setup();
        backend
            .write("coins_2024_6", r#"{"expenses":[],"salary":3000}"#)
            .unwrap();

        ledger.add(food(date(2024, 7, 4), 500)).unwrap();

        let july = store.get(Period::new(2024, 6).unwrap()).unwrap().unwrap();
        assert_eq!(july.expenses.len(), 1);
        assert_eq!(july.salary.cents(), 300000);
    }

    #[test]
    fn test_add_to_corrupt_other_period_fails() {
        let (backend, _, mut ledger) = setup();
        backend.write("coins_2024_6", "not json").unwrap();

        let err = ledger.add(food(date(2024, 7, 4), 500)).unwrap_err();

        assert!(err.is_corrupt());
        assert_eq!(backend.read("coins_2024_6").unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (backend, _, mut ledger) = setup();

        let err = ledger.add(food(date(2024, 6, 1), 0)).unwrap_err();
        assert!(err.is_validation());
        let err = ledger.add(food(date(2024, 6, 1), -100)).unwrap_err();
        assert!(err.is_validation());

        assert!(ledger.expenses().is_empty());
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn test_update_merges_fields() {
        let (_, store, mut ledger) = setup();
        let added = ledger.add(food(date(2024, 6, 2), 800)).unwrap();

        let update = ExpenseUpdate {
            category: Some(Category::Entertainment),
            remarks: Some("cinema".into()),
            ..Default::default()
        };
        assert!(ledger.update(added.id, &update).unwrap());

        let expense = ledger.find(added.id).unwrap();
        assert_eq!(expense.category, Category::Entertainment);
        assert_eq!(expense.remarks, "cinema");
        assert_eq!(expense.amount.cents(), 800);
        assert_eq!(expense.created_at, added.created_at);

        let stored = store.get(june_2024()).unwrap().unwrap();
        assert_eq!(stored.expenses[0].category, Category::Entertainment);
    }

    #[test]
    fn test_update_rejects_non_positive_amount() {
        let (_, store, mut ledger) = setup();
        let added = ledger.add(food(date(2024, 6, 2), 800)).unwrap();

        let update = ExpenseUpdate {
            amount: Some(Money::zero()),
            ..Default::default()
        };
        assert!(ledger.update(added.id, &update).unwrap_err().is_validation());

        assert_eq!(ledger.find(added.id).unwrap().amount.cents(), 800);
        let stored = store.get(june_2024()).unwrap().unwrap();
        assert_eq!(stored.expenses[0].amount.cents(), 800);
    }

    #[test]
    fn test_update_rejects_date_outside_period() {
        let (_, _, mut ledger) = setup();
        let added = ledger.add(food(date(2024, 6, 2), 800)).unwrap();

        let update = ExpenseUpdate {
            date: Some(date(2024, 7, 2)),
            ..Default::default()
        };
        assert!(ledger.update(added.id, &update).unwrap_err().is_validation());
        assert_eq!(ledger.find(added.id).unwrap().date, date(2024, 6, 2));
    }

    #[test]
    fn test_missing_id_is_noop() {
        let (backend, store, mut ledger) = setup();
        ledger.add(food(date(2024, 6, 2), 800)).unwrap();
        let before = store.get(june_2024()).unwrap();
        backend.fail_after_writes(0).unwrap();

        let stranger = ExpenseId::new();
        let update = ExpenseUpdate {
            amount: Some(Money::from_cents(1)),
            ..Default::default()
        };
        assert!(!ledger.update(stranger, &update).unwrap());
        assert_eq!(ledger.delete(stranger).unwrap(), None);

        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(store.get(june_2024()).unwrap(), before);
    }

    #[test]
    fn test_delete() {
        let (_, store, mut ledger) = setup();
        let keep = ledger.add(food(date(2024, 6, 2), 800)).unwrap();
        let drop = ledger.add(food(date(2024, 6, 3), 900)).unwrap();

        let removed = ledger.delete(drop.id).unwrap();

        assert_eq!(removed, Some(drop));
        assert_eq!(ledger.expenses(), &[keep.clone()]);
        assert_eq!(store.get(june_2024()).unwrap().unwrap().expenses, vec![keep]);
    }

    #[test]
    fn test_set_salary() {
        let (_, store, mut ledger) = setup();

        ledger.set_salary(Money::from_cents(420000)).unwrap();
        assert_eq!(ledger.salary().cents(), 420000);
        assert_eq!(store.get(june_2024()).unwrap().unwrap().salary.cents(), 420000);

        ledger.set_salary(Money::zero()).unwrap();
        assert!(ledger.salary().is_zero());
    }

    #[test]
    fn test_set_salary_rejects_negative() {
        let (_, store, mut ledger) = setup();

        let err = ledger.set_salary(Money::from_cents(-1)).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.get(june_2024()).unwrap(), None);
    }

    #[test]
    fn test_set_salary_rejects_unreadable_amount() {
        let (_, store, mut ledger) = setup();

        let err = ledger
            .set_salary(Money::from_cents(Money::MAX_CENTS + 1))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.get(june_2024()).unwrap(), None);
    }

    #[test]
    fn test_sub_cent_amounts_are_never_rewritten() {
        let (backend, store, _) = setup();
        let raw = r#"{"expenses":[{"id":"550e8400-e29b-41d4-a716-446655440000","date":"2024-06-03","category":"Food","amount":0.004,"remarks":"","createdAt":0}],"salary":1000.125}"#;
        backend.write("coins_2024_5", raw).unwrap();

        assert!(ExpenseLedger::open(store.clone(), june_2024())
            .unwrap_err()
            .is_corrupt());

        let mut july = ExpenseLedger::open(store, Period::new(2024, 6).unwrap()).unwrap();
        let err = july.add(food(date(2024, 6, 20), 100)).unwrap_err();

        assert!(err.is_corrupt());
        assert_eq!(backend.read("coins_2024_5").unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn test_add_rejects_unreadable_amount() {
        let (backend, _, mut ledger) = setup();

        let err = ledger
            .add(food(date(2024, 6, 2), Money::MAX_CENTS + 1))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_working_set() {
        let (backend, _, mut ledger) = setup();
        ledger.add(food(date(2024, 6, 2), 800)).unwrap();
        backend.fail_after_writes(0).unwrap();

        let err = ledger.add(food(date(2024, 6, 3), 900)).unwrap_err();
        assert!(err.is_storage_unavailable());
        assert_eq!(ledger.expenses().len(), 1);

        assert!(ledger.set_salary(Money::from_cents(100)).is_err());
        assert!(ledger.salary().is_zero());
    }

    #[test]
    fn test_select_period_loads_record() {
        let (_, _, mut ledger) = setup();
        ledger.add(food(date(2024, 6, 2), 800)).unwrap();
        ledger.add(food(date(2024, 7, 2), 900)).unwrap();

        ledger.select_period(Period::new(2024, 6).unwrap()).unwrap();
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()[0].amount.cents(), 900);

        ledger.select_period(Period::new(2030, 0).unwrap()).unwrap();
        assert!(ledger.expenses().is_empty());
        assert!(ledger.salary().is_zero());
    }

    #[test]
    fn test_select_corrupt_period_keeps_selection() {
        let (backend, _, mut ledger) = setup();
        backend.write("coins_2024_6", "[").unwrap();

        let err = ledger.select_period(Period::new(2024, 6).unwrap()).unwrap_err();

        assert!(err.is_corrupt());
        assert_eq!(ledger.period(), june_2024());
    }

    #[test]
    fn test_mutations_survive_restart() {
        let temp_dir = TempDir::new().unwrap();
        let open_store = || {
            PeriodStore::new(Arc::new(
                FileBackend::new(temp_dir.path().to_path_buf()).unwrap(),
            ))
        };

        let added = {
            let mut ledger = ExpenseLedger::open(open_store(), june_2024()).unwrap();
            ledger.set_salary(Money::from_cents(300000)).unwrap();
            ledger.add(food(date(2024, 6, 5), 4550)).unwrap()
        };

        let ledger = ExpenseLedger::open(open_store(), june_2024()).unwrap();
        assert_eq!(ledger.salary().cents(), 300000);
        assert_eq!(ledger.expenses(), &[added]);
    }
}
