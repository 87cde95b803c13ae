//! Monthly Dashboard
//!
//! Headline figures for one period: income, spending and what is left.

use crate::models::{Money, MonthlyRecord, Period};

/// Summary of a single month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDashboard {
    pub period: Period,
    pub salary: Money,
    pub total_expenses: Money,
    /// Salary minus expenses; negative when overspent
    pub remaining: Money,
    /// Expenses as a percentage of salary, 0 when there is no salary
    pub expense_percentage: f64,
    pub expense_count: usize,
}

impl MonthlyDashboard {
    pub fn generate(period: Period, record: &MonthlyRecord) -> Self {
        let total_expenses = record.total_expenses();
        let expense_percentage = if record.salary.is_positive() {
            total_expenses.cents() as f64 / record.salary.cents() as f64 * 100.0
        } else {
            0.0
        };

        Self {
            period,
            salary: record.salary,
            total_expenses,
            remaining: record.salary - total_expenses,
            expense_percentage,
            expense_count: record.expenses.len(),
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.period.friendly_name()));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Income:",
            self.salary.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Expenses:",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Remaining:",
            self.remaining.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>18.1}%\n",
            "Of income spent:", self.expense_percentage
        ));
        output.push_str(&format!("{:<20} {:>19}\n", "Expenses logged:", self.expense_count));

        if self.is_overspent() {
            output.push_str("\nWARNING: spending exceeds income this month\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, NewExpense};
    use chrono::NaiveDate;

    fn record(salary: i64, amounts: &[i64]) -> MonthlyRecord {
        let expenses = amounts
            .iter()
            .map(|cents| {
                Expense::new(NewExpense::new(
                    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    Category::Food,
                    Money::from_cents(*cents),
                ))
            })
            .collect();
        MonthlyRecord::new(expenses, Money::from_cents(salary))
    }

    #[test]
    fn test_generate() {
        let period = Period::new(2024, 5).unwrap();
        let dashboard = MonthlyDashboard::generate(period, &record(200000, &[50000, 10000]));

        assert_eq!(dashboard.total_expenses.cents(), 60000);
        assert_eq!(dashboard.remaining.cents(), 140000);
        assert!((dashboard.expense_percentage - 30.0).abs() < 1e-9);
        assert_eq!(dashboard.expense_count, 2);
        assert!(!dashboard.is_overspent());
    }

    #[test]
    fn test_zero_salary_percentage() {
        let period = Period::new(2024, 5).unwrap();
        let dashboard = MonthlyDashboard::generate(period, &record(0, &[500]));

        assert_eq!(dashboard.expense_percentage, 0.0);
        assert_eq!(dashboard.remaining.cents(), -500);
        assert!(dashboard.is_overspent());
        assert!(dashboard.format_terminal("$").contains("WARNING"));
    }

    #[test]
    fn test_format_terminal() {
        let period = Period::new(2024, 5).unwrap();
        let output = MonthlyDashboard::generate(period, &record(100000, &[2500])).format_terminal("€");

        assert!(output.contains("June 2024"));
        assert!(output.contains("€1000.00"));
        assert!(output.contains("€975.00"));
        assert!(output.contains("2.5%"));
    }
}
