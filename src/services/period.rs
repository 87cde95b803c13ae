//! Period selection service
//!
//! Turns what a user types into a [`Period`]: `YYYY-MM`, a month name with an
//! optional year, or a relative word such as `last`.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{DimeError, DimeResult};
use crate::models::Period;

const MONTH_NAMES: [(&str, u32); 12] = [
    ("january", 0),
    ("february", 1),
    ("march", 2),
    ("april", 3),
    ("may", 4),
    ("june", 5),
    ("july", 6),
    ("august", 7),
    ("september", 8),
    ("october", 9),
    ("november", 10),
    ("december", 11),
];

/// Service for resolving user-supplied periods
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    today: NaiveDate,
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodService {
    /// Resolve relative periods against today's local date
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Resolve relative periods against a fixed date
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn current_period(&self) -> Period {
        Period::from_date(self.today)
    }

    /// Parse a period string or get the current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> DimeResult<Period> {
        match period_str {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period string
    ///
    /// Accepts "2025-01", "January 2025", "jan", "current", "last" and "next".
    pub fn parse(&self, s: &str) -> DimeResult<Period> {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_period()),
            "last" | "previous" | "prev" => return Ok(self.current_period().prev()),
            "next" => return Ok(self.current_period().next()),
            _ => {}
        }

        if let Some(period) = self.parse_month_name(&lower) {
            return Ok(period);
        }

        Period::parse(&lower)
            .map_err(|_| DimeError::Validation(format!("Invalid period format: {}", s)))
    }

    /// "March", "mar 2024"; without a year, the most recent such month
    fn parse_month_name(&self, s: &str) -> Option<Period> {
        let (name, rest) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };
        if name.len() < 3 {
            return None;
        }

        let (_, month) = MONTH_NAMES
            .iter()
            .find(|(full, _)| full.starts_with(name))?;

        let year = if rest.is_empty() {
            if *month > self.today.month0() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        Period::new(year, *month).ok()
    }

    /// The last `count` periods ending with the current one, oldest first
    pub fn recent_periods(&self, count: usize) -> Vec<Period> {
        let mut periods = Vec::with_capacity(count);
        let mut current = self.current_period();

        for _ in 0..count {
            periods.push(current);
            current = current.prev();
        }

        periods.reverse();
        periods
    }
}
