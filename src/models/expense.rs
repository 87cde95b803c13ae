//! Expense model
//!
//! An expense is a single dated, categorized outflow. Its `id` and
//! `created_at` are assigned once on creation; everything else can be edited.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::period::Period;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Expense amount is too large (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date the money was spent; decides which period owns it
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    pub category: Category,

    pub amount: Money,

    /// Free-form notes
    #[serde(default)]
    pub remarks: String,

    /// When the expense was recorded
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create an expense from caller-supplied data, assigning a fresh id and
    /// creation timestamp
    pub fn new(data: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            date: data.date,
            category: data.category,
            amount: data.amount,
            remarks: data.remarks,
            created_at: now_millis(),
        }
    }

    /// The period this expense belongs to
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_amount(self.amount)
    }

    /// Merge the given fields into this expense
    pub fn apply(&mut self, update: &ExpenseUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(remarks) = &update.remarks {
            self.remarks = remarks.clone();
        }
    }
}

/// Current time truncated to the millisecond precision used on the wire, so
/// a freshly created expense compares equal to its stored copy
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

fn validate_amount(amount: Money) -> Result<(), ExpenseValidationError> {
    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }
    if amount.exceeds_limit() {
        return Err(ExpenseValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Data for a new expense, before an id and timestamp are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
    pub remarks: String,
}

impl NewExpense {
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            date,
            category,
            amount,
            remarks: String::new(),
        }
    }

    /// Builder-style remarks setter
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_amount(self.amount)
    }
}

/// A partial edit; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
    pub amount: Option<Money>,
    pub remarks: Option<String>,
}

impl ExpenseUpdate {
    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.remarks.is_none()
    }
}

/// `YYYY-MM-DD` dates; a trailing time component written by older clients
/// is ignored on read
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let day = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(day, FORMAT).map_err(serde::de::Error::custom)
    }
}
