//! Service layer for Dime
//!
//! Business rules on top of the storage layer: the selected month's ledger,
//! the currency preference, period parsing, and the session that ties them
//! together.

pub mod currency;
pub mod ledger;
pub mod period;
pub mod session;

pub use currency::CurrencyPreference;
pub use ledger::ExpenseLedger;
pub use period::PeriodService;
pub use session::Session;
