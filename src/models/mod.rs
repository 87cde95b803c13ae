//! Core data models for Dime
//!
//! Expenses, the per-month record they are stored in, calendar periods, and
//! the small value types around them.

pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod record;

pub use category::{Category, CategoryParseError};
pub use currency::Currency;
pub use expense::{Expense, ExpenseUpdate, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use record::{LegacyV0, MonthlyRecord};
