//! Currency display preference
//!
//! Purely a label for rendering amounts. No conversion is ever performed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency the user can choose for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. "USD"
    pub code: String,
    /// Symbol placed before amounts, e.g. "$"
    pub symbol: String,
    /// Human readable name
    pub name: String,
}

/// (code, symbol, name) for every supported currency; the first is the default
const SUPPORTED: [(&str, &str, &str); 7] = [
    ("USD", "$", "US Dollar"),
    ("EUR", "€", "Euro"),
    ("GBP", "£", "British Pound"),
    ("INR", "₹", "Indian Rupee"),
    ("JPY", "¥", "Japanese Yen"),
    ("CAD", "C$", "Canadian Dollar"),
    ("AUD", "A$", "Australian Dollar"),
];

impl Currency {
    fn from_entry(entry: &(&str, &str, &str)) -> Self {
        Self {
            code: entry.0.to_string(),
            symbol: entry.1.to_string(),
            name: entry.2.to_string(),
        }
    }

    /// Every supported currency, default first
    pub fn all() -> Vec<Currency> {
        SUPPORTED.iter().map(Self::from_entry).collect()
    }

    /// Look up a supported currency by code (case-insensitive)
    pub fn find(code: &str) -> Option<Currency> {
        let code = code.trim();
        SUPPORTED
            .iter()
            .find(|entry| entry.0.eq_ignore_ascii_case(code))
            .map(Self::from_entry)
    }

    /// Whether this exact preference is one of the supported set
    pub fn is_supported(&self) -> bool {
        Self::find(&self.code).is_some_and(|known| &known == self)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::from_entry(&SUPPORTED[0])
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.code, self.symbol, self.name)
    }
}
