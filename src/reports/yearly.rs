//! Yearly Rollup
//!
//! Reads all twelve periods of a year straight from the store and sums
//! income, expenses and savings per month and per category. Never cached.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{DimeError, DimeResult};
use crate::models::{Category, Money, Period};
use crate::storage::PeriodStore;

/// Totals for one month of the year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStat {
    pub period: Period,
    /// Short month label ("Jan")
    pub label: &'static str,
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
}

/// Yearly income and spending summary
#[derive(Debug, Clone)]
pub struct YearlyRollup {
    pub year: i32,
    /// Twelve entries, January first
    pub monthly_stats: Vec<MonthlyStat>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_savings: Money,
    /// Summed amount per category; categories without spending are absent
    pub category_totals: BTreeMap<Category, Money>,
}

impl YearlyRollup {
    /// Compute the rollup for `year` from the current stored state
    ///
    /// Absent months count as zero. A corrupt month fails the whole rollup.
    pub fn compute(store: &PeriodStore, year: i32) -> DimeResult<Self> {
        let mut monthly_stats = Vec::with_capacity(12);
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut category_totals: BTreeMap<Category, Money> = BTreeMap::new();

        for period in Period::months_of(year) {
            let record = store.get_or_default(period)?;

            let mut month_expenses = Money::zero();
            for expense in &record.expenses {
                month_expenses += expense.amount;
                *category_totals.entry(expense.category).or_default() += expense.amount;
            }

            total_income += record.salary;
            total_expenses += month_expenses;
            monthly_stats.push(MonthlyStat {
                period,
                label: period.short_label(),
                income: record.salary,
                expenses: month_expenses,
                savings: record.salary - month_expenses,
            });
        }

        category_totals.retain(|_, total| !total.is_zero());

        Ok(Self {
            year,
            monthly_stats,
            total_income,
            total_expenses,
            total_savings: total_income - total_expenses,
            category_totals,
        })
    }

    /// Categories with the highest totals, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<(Category, Money)> {
        let mut categories: Vec<_> = self
            .category_totals
            .iter()
            .map(|(category, total)| (*category, *total))
            .collect();

        categories.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        categories.truncate(limit);
        categories
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Yearly Overview: {}\n", self.year));
        output.push_str(&"=".repeat(56));
        output.push('\n');

        output.push_str(&format!(
            "{:<8} {:>15} {:>15} {:>15}\n",
            "Month", "Income", "Expenses", "Savings"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for stat in &self.monthly_stats {
            output.push_str(&format!(
                "{:<8} {:>15} {:>15} {:>15}\n",
                stat.label,
                stat.income.format_with_symbol(symbol),
                stat.expenses.format_with_symbol(symbol),
                stat.savings.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>15} {:>15} {:>15}\n",
            "TOTAL",
            self.total_income.format_with_symbol(symbol),
            self.total_expenses.format_with_symbol(symbol),
            self.total_savings.format_with_symbol(symbol)
        ));

        if !self.category_totals.is_empty() {
            output.push_str("\nBy Category\n");
            for (category, total) in self.top_categories(self.category_totals.len()) {
                let share = if self.total_expenses.is_zero() {
                    0.0
                } else {
                    total.cents() as f64 / self.total_expenses.cents() as f64 * 100.0
                };
                output.push_str(&format!(
                    "  {:<22} {:>15} {:>7.1}%\n",
                    category.label(),
                    total.format_with_symbol(symbol),
                    share
                ));
            }
        }

        output
    }

    /// Export the monthly rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DimeResult<()> {
        writeln!(writer, "Month,Income,Expenses,Savings")
            .map_err(|e| DimeError::Export(e.to_string()))?;

        for stat in &self.monthly_stats {
            writeln!(
                writer,
                "{},{},{},{}",
                stat.period, stat.income, stat.expenses, stat.savings
            )
            .map_err(|e| DimeError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{},{},{}",
            self.total_income, self.total_expenses, self.total_savings
        )
        .map_err(|e| DimeError::Export(e.to_string()))?;

        Ok(())
    }
}
