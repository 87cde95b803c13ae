//! Spending Report
//!
//! Breaks one month's expenses down by category, by day and by amount range.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{DimeError, DimeResult};
use crate::models::{Category, Expense, Money, Period};

/// Number of amount ranges in the histogram
const HISTOGRAM_BINS: usize = 5;

/// Bin width used when every amount is zero, in hundredths
const FALLBACK_BIN_WIDTH: f64 = 10_000.0;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: Category,
    pub total: Money,
    pub expense_count: usize,
    /// Share of the month's spending
    pub percentage: f64,
}

/// Spending on one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub total: Money,
}

/// One amount range of the histogram, `lower <= amount < upper`
#[derive(Debug, Clone, PartialEq)]
pub struct AmountBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl AmountBin {
    /// Range label in whole units, e.g. "0 - 20"
    pub fn label(&self) -> String {
        format!("{:.0} - {:.0}", self.lower, self.upper)
    }
}

/// Spending Report for one period
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub period: Period,
    /// Categories with spending, in category order
    pub categories: Vec<SpendingByCategory>,
    /// Days with spending, oldest first
    pub daily: Vec<DailySpending>,
    /// Empty when there are no expenses
    pub histogram: Vec<AmountBin>,
    pub total_spending: Money,
    pub total_expenses: usize,
}

impl SpendingReport {
    pub fn generate(period: Period, expenses: &[Expense]) -> Self {
        let total_spending: Money = expenses.iter().map(|e| e.amount).sum();

        Self {
            period,
            categories: category_breakdown(expenses, total_spending),
            daily: daily_trend(expenses),
            histogram: amount_histogram(expenses),
            total_spending,
            total_expenses: expenses.len(),
        }
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> Vec<&SpendingByCategory> {
        let mut categories: Vec<_> = self.categories.iter().collect();
        categories.sort_by(|a, b| b.total.cmp(&a.total));
        categories.into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Report: {}\n", self.period.friendly_name()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total_spending.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Total Expenses: {}\n\n", self.total_expenses));

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>15} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>15} {:>8} {:>7.1}%\n",
                row.category.label(),
                row.total.format_with_symbol(symbol),
                row.expense_count,
                row.percentage
            ));
        }

        output.push_str("\nDaily Trend\n");
        for day in &self.daily {
            output.push_str(&format!(
                "  {:<10} {:>15}\n",
                day.date.format("%b %-d").to_string(),
                day.total.format_with_symbol(symbol)
            ));
        }

        output.push_str("\nAmount Ranges\n");
        for bin in &self.histogram {
            output.push_str(&format!("  {:<20} {:>5}\n", bin.label(), bin.count));
        }

        output
    }

    /// Export the category breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DimeResult<()> {
        writeln!(writer, "Period,Category,Amount,Expense Count,Percentage")
            .map_err(|e| DimeError::Export(e.to_string()))?;

        for row in &self.categories {
            writeln!(
                writer,
                "{},{},{},{},{:.2}",
                self.period,
                row.category.label(),
                row.total,
                row.expense_count,
                row.percentage
            )
            .map_err(|e| DimeError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL,{},{},100.00",
            self.period, self.total_spending, self.total_expenses
        )
        .map_err(|e| DimeError::Export(e.to_string()))?;

        Ok(())
    }
}

fn category_breakdown(expenses: &[Expense], total_spending: Money) -> Vec<SpendingByCategory> {
    Category::ALL
        .iter()
        .filter_map(|category| {
            let (total, expense_count) = expenses
                .iter()
                .filter(|e| e.category == *category)
                .fold((Money::zero(), 0), |(sum, n), e| (sum + e.amount, n + 1));
            if !total.is_positive() {
                return None;
            }

            let percentage = if total_spending.is_positive() {
                total.cents() as f64 / total_spending.cents() as f64 * 100.0
            } else {
                0.0
            };
            Some(SpendingByCategory {
                category: *category,
                total,
                expense_count,
                percentage,
            })
        })
        .collect()
}

fn daily_trend(expenses: &[Expense]) -> Vec<DailySpending> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses {
        *by_date.entry(expense.date).or_default() += expense.amount;
    }

    by_date
        .into_iter()
        .map(|(date, total)| DailySpending { date, total })
        .collect()
}

fn amount_histogram(expenses: &[Expense]) -> Vec<AmountBin> {
    let Some(max) = expenses.iter().map(|e| e.amount).max() else {
        return Vec::new();
    };

    // bounds in hundredths
    let width = match max.cents() as f64 / HISTOGRAM_BINS as f64 {
        w if w > 0.0 => w,
        _ => FALLBACK_BIN_WIDTH,
    };
    let bounds: Vec<(f64, f64)> = (0..HISTOGRAM_BINS)
        .map(|i| (i as f64 * width, (i + 1) as f64 * width))
        .collect();

    let mut counts = [0usize; HISTOGRAM_BINS];
    for expense in expenses {
        let amount = expense.amount.cents() as f64;
        let index = bounds
            .iter()
            .position(|(lower, upper)| amount >= *lower && amount < *upper)
            .unwrap_or(HISTOGRAM_BINS - 1);
        counts[index] += 1;
    }

    bounds
        .into_iter()
        .zip(counts)
        .map(|((lower, upper), count)| AmountBin {
            lower: lower / 100.0,
            upper: upper / 100.0,
            count,
        })
        .collect()
}
