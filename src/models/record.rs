//! Stored record schemas
//!
//! Two versions of the persisted layout exist:
//!
//! - [`LegacyV0`]: one flat expense list plus one global salary, kept under two
//!   separate storage entries.
//! - [`MonthlyRecord`]: the current layout, one record per calendar month.
//!
//! A missing `MonthlyRecord` is never silently replaced by an empty one here;
//! callers ask for [`MonthlyRecord::default`] explicitly after a store lookup
//! reports the period as absent.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// Expenses and income for one period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Newest first
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Income for the period
    #[serde(default)]
    pub salary: Money,
}

impl MonthlyRecord {
    pub fn new(expenses: Vec<Expense>, salary: Money) -> Self {
        Self { expenses, salary }
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Salary minus total expenses
    pub fn savings(&self) -> Money {
        self.salary - self.total_expenses()
    }

    /// Insert an expense at the front (newest-first order)
    pub fn prepend(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Remove an expense by id, returning it if it was present
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.salary.is_zero()
    }
}

/// The unpartitioned pre-migration layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyV0 {
    /// Every expense ever recorded, in stored order
    pub expenses: Vec<Expense>,
    /// The single salary that applied to all months
    pub salary: Money,
}
