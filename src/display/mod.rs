//! Display formatting for terminal output
//!
//! Formats expenses, currencies and report charts for the command line.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use report::{format_histogram, format_spending_charts};

use crate::models::Currency;

/// Format the supported currencies, marking the active one
pub fn format_currency_list(current: &Currency) -> String {
    let mut output = String::new();
    for currency in Currency::all() {
        let marker = if currency.code == current.code { "*" } else { " " };
        output.push_str(&format!("{} {}\n", marker, currency));
    }
    output
}
