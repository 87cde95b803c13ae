//! Storage key layout
//!
//! The key of a period is its durable identity: it must never change for an
//! existing installation. Keys are `coins_<year>_<month>` with a zero-based
//! month, so January 2024 is `coins_2024_0`.

use crate::models::Period;

const PERIOD_PREFIX: &str = "coins_";

/// Flat expense list written before data was partitioned by month
pub const LEGACY_EXPENSES_KEY: &str = "dime_expenses";

/// Single global salary written before data was partitioned by month
pub const LEGACY_SALARY_KEY: &str = "dime_salary";

/// Display currency preference
pub const CURRENCY_KEY: &str = "dime_currency";

/// Storage key of a period
pub fn encode(period: Period) -> String {
    format!("{}{}_{}", PERIOD_PREFIX, period.year(), period.month())
}

/// Recover the period from a key produced by [`encode`]
///
/// Returns `None` for any other key, including non-canonical spellings such
/// as `coins_2024_05`.
pub fn decode(key: &str) -> Option<Period> {
    let rest = key.strip_prefix(PERIOD_PREFIX)?;
    let (year, month) = rest.rsplit_once('_')?;
    let period = Period::new(year.parse().ok()?, month.parse().ok()?).ok()?;
    (encode(period) == key).then_some(period)
}
