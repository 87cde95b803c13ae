//! Session facade
//!
//! Everything a front end needs, in one place: the selected month's working
//! set, the currency preference and the derived reports. Opening a session
//! runs the legacy migration before anything else reads storage.

use crate::config::paths::DimePaths;
use crate::config::settings::Settings;
use crate::error::DimeResult;
use crate::models::{Currency, Expense, ExpenseId, ExpenseUpdate, Money, NewExpense, Period};
use crate::reports::{MonthlyDashboard, SpendingReport, YearlyRollup};
use crate::storage::{initialize_storage, Storage};

use super::currency::CurrencyPreference;
use super::ledger::ExpenseLedger;

/// One user session over a storage location
#[derive(Debug)]
pub struct Session {
    storage: Storage,
    currency: CurrencyPreference,
    ledger: ExpenseLedger,
}

impl Session {
    /// Open the file-backed store at `paths` with the current month selected
    pub fn open(paths: &DimePaths, settings: &Settings) -> DimeResult<Self> {
        let storage = initialize_storage(paths, settings)?;
        Self::start(storage, Period::current())
    }

    /// Start a session on already-opened storage
    ///
    /// Does not run the legacy migration; callers that build storage by hand
    /// decide that themselves.
    pub fn start(storage: Storage, period: Period) -> DimeResult<Self> {
        let currency = CurrencyPreference::load(storage.currency.clone())?;
        let ledger = ExpenseLedger::open(storage.periods.clone(), period)?;
        Ok(Self {
            storage,
            currency,
            ledger,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn selected_period(&self) -> Period {
        self.ledger.period()
    }

    pub fn select_period(&mut self, period: Period) -> DimeResult<()> {
        self.ledger.select_period(period)
    }

    pub fn selected_expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    pub fn selected_salary(&self) -> Money {
        self.ledger.salary()
    }

    pub fn set_salary(&mut self, amount: Money) -> DimeResult<()> {
        self.ledger.set_salary(amount)
    }

    pub fn add_expense(&mut self, data: NewExpense) -> DimeResult<Expense> {
        self.ledger.add(data)
    }

    pub fn update_expense(&mut self, id: ExpenseId, update: &ExpenseUpdate) -> DimeResult<bool> {
        self.ledger.update(id, update)
    }

    pub fn delete_expense(&mut self, id: ExpenseId) -> DimeResult<Option<Expense>> {
        self.ledger.delete(id)
    }

    pub fn currency(&self) -> &Currency {
        self.currency.current()
    }

    pub fn set_currency(&mut self, currency: Currency) -> DimeResult<()> {
        self.currency.set(currency)
    }

    /// Rollup of `year`, read fresh from storage
    pub fn yearly_rollup(&self, year: i32) -> DimeResult<YearlyRollup> {
        YearlyRollup::compute(&self.storage.periods, year)
    }

    pub fn dashboard(&self) -> MonthlyDashboard {
        MonthlyDashboard::generate(self.ledger.period(), self.ledger.record())
    }

    pub fn spending_breakdown(&self) -> SpendingReport {
        SpendingReport::generate(self.ledger.period(), self.ledger.expenses())
    }

    /// Every period that has stored data, oldest first
    pub fn stored_periods(&self) -> DimeResult<Vec<Period>> {
        self.storage.periods.list_periods()
    }
}
