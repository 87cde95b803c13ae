//! Calendar month periods
//!
//! A period is the (year, month) bucket that financial data is partitioned
//! by. Months are zero-based (`0` = January) to match the storage key layout;
//! the `Display` and `parse` forms use the familiar one-based `YYYY-MM`.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{DimeError, DimeResult};

/// Three-letter month labels, January first
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    /// Zero-based month, always in 0..=11
    month: u32,
}

impl Period {
    /// Create a period from a year and zero-based month
    pub fn new(year: i32, month: u32) -> DimeResult<Self> {
        if month > 11 {
            return Err(DimeError::Validation(format!(
                "Month must be between 0 and 11, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The period a calendar date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The period containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// All twelve periods of a year, January first
    pub fn months_of(year: i32) -> impl Iterator<Item = Period> {
        (0..12).map(move |month| Period { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// One-based month (1 = January)
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    /// Short month label such as "Jan"
    pub fn short_label(&self) -> &'static str {
        MONTH_LABELS[self.month as usize]
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a period string in `YYYY-MM` form (one-based month)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        // rsplit so that negative years ("-0044-03") still parse
        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Ok(Self {
            year,
            month: month - 1,
        })
    }

    /// Friendly name such as "June 2024"
    pub fn friendly_name(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_number())
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_validates_month() {
        assert!(Period::new(2024, 0).is_ok());
        assert!(Period::new(2024, 11).is_ok());
        assert!(Period::new(2024, 12).unwrap_err().is_validation());
    }

    #[test]
    fn test_from_date_is_zero_based() {
        let period = Period::from_date(date(2024, 6, 1));
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 5);
        assert_eq!(period.short_label(), "Jun");
    }

    #[test]
    fn test_month_boundaries() {
        let may = Period::new(2024, 4).unwrap();
        assert!(may.contains(date(2024, 5, 31)));
        assert!(!may.contains(date(2024, 6, 1)));
    }

    #[test]
    fn test_navigation() {
        let dec = Period::new(2024, 11).unwrap();
        assert_eq!(dec.next(), Period::new(2025, 0).unwrap());
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_months_of() {
        let months: Vec<_> = Period::months_of(2023).collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], Period::new(2023, 0).unwrap());
        assert_eq!(months[11], Period::new(2023, 11).unwrap());
    }

    #[test]
    fn test_parse_and_display() {
        let period = Period::parse("2025-01").unwrap();
        assert_eq!(period, Period::new(2025, 0).unwrap());
        assert_eq!(period.to_string(), "2025-01");
        assert_eq!(period.friendly_name(), "January 2025");
        assert_eq!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(Period::parse("January").is_err());
    }
}
