//! Expense display formatting
//!
//! Register-style listing of a month's expenses and a detail view for one.

use crate::models::{Currency, Expense, Money, Period};

use super::report::truncate;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, symbol: &str, date_format: &str) -> String {
    format!(
        "{:<12} {:<10} {:<13} {:>12}  {}",
        expense.id,
        expense.date.format(date_format),
        expense.category.label(),
        expense.amount.format_with_symbol(symbol),
        truncate(&expense.remarks, 30)
    )
}

/// Format the expenses of a period as a register
pub fn format_expense_list(
    period: Period,
    expenses: &[Expense],
    currency: &Currency,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return format!("No expenses recorded for {}.\n", period.friendly_name());
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Expenses for {} ({})\n\n",
        period.friendly_name(),
        currency.code
    ));
    output.push_str(&format!(
        "{:<12} {:<10} {:<13} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Remarks"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, &currency.symbol, date_format));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "{:<37} {:>12}\n",
        format!("Total ({} expenses)", expenses.len()),
        total.format_with_symbol(&currency.symbol)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date.format(date_format)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    if !expense.remarks.is_empty() {
        output.push_str(&format!("Remarks:  {}\n", expense.remarks));
    }
    output.push_str(&format!(
        "Recorded: {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
