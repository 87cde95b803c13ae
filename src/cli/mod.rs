//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod currency;
pub mod expense;
pub mod report;
pub mod salary;

pub use currency::{handle_currency_command, CurrencyCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
pub use salary::{handle_salary_command, SalaryCommands};
