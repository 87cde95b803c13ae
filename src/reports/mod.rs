//! Reports module for Dime
//!
//! Derived views over stored records: the monthly dashboard, the monthly
//! spending breakdown and the yearly rollup. None of them is ever persisted.

pub mod dashboard;
pub mod spending;
pub mod yearly;

pub use dashboard::MonthlyDashboard;
pub use spending::{AmountBin, DailySpending, SpendingByCategory, SpendingReport};
pub use yearly::{MonthlyStat, YearlyRollup};
