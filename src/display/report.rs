//! Report formatting utilities for terminal output
//!
//! Bar charts for the monthly spending breakdown, plus small text helpers.

use crate::models::Currency;
use crate::reports::{AmountBin, SpendingReport};

const BAR_WIDTH: usize = 24;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Category shares and amount ranges of a month as bar charts
pub fn format_spending_charts(report: &SpendingReport, currency: &Currency) -> String {
    let mut output = String::new();

    output.push_str("Category Share\n");
    let top_share = report
        .categories
        .iter()
        .map(|c| c.percentage)
        .fold(0.0, f64::max);
    for row in &report.categories {
        output.push_str(&format!(
            "  {:<14} {} {:>6} {:>12}\n",
            row.category.label(),
            format_bar(row.percentage, top_share, BAR_WIDTH),
            format_percentage(row.percentage),
            row.total.format_with_symbol(&currency.symbol)
        ));
    }

    output.push_str("\nExpenses by Amount\n");
    output.push_str(&format_histogram(&report.histogram));

    output
}

/// Histogram of expense counts per amount range
pub fn format_histogram(bins: &[AmountBin]) -> String {
    if bins.is_empty() {
        return "  (no expenses)\n".to_string();
    }

    let most = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    bins.iter()
        .map(|bin| {
            format!(
                "  {:<16} {} {:>4}\n",
                bin.label(),
                format_bar(bin.count as f64, most, BAR_WIDTH),
                bin.count
            )
        })
        .collect()
}
