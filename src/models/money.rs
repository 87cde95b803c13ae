//! Money type for representing amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point drift
//! when summing. On the wire an amount is a plain JSON number in major units
//! (`12.5`), which keeps stored records readable and compatible with data
//! written by other tools. The currency is a display label only.
//!
//! Stored numbers that are not a whole number of hundredths, or that exceed
//! [`Money::MAX_CENTS`], are rejected rather than rounded, so reading and
//! rewriting a record never alters an amount.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An amount stored as hundredths of the (unspecified) currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest float error (relative to the amount) still read as whole hundredths
const HUNDREDTHS_TOLERANCE: f64 = 1e-9;

impl Money {
    /// Largest magnitude, in hundredths, that parsing or reading accepts
    ///
    /// Well inside `i64`, and exactly representable as `f64`.
    pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use dime::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal quantity in major units
    ///
    /// Fails unless `value` is finite, within [`Money::MAX_CENTS`], and a
    /// whole number of hundredths up to float representation error.
    pub fn try_from_major(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }

        let scaled = value * 100.0;
        let cents = scaled.round();
        if cents.abs() > Self::MAX_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        if (scaled - cents).abs() > HUNDREDTHS_TOLERANCE * cents.abs().max(1.0) {
            return Err(MoneyParseError::FractionalCents(value.to_string()));
        }

        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal quantity in major units
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the magnitude is beyond [`Money::MAX_CENTS`] and would not read back
    pub const fn exceeds_limit(&self) -> bool {
        self.0.unsigned_abs() > Self::MAX_CENTS as u64
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5". Digits past the
    /// second decimal place are truncated. Magnitudes above
    /// [`Money::MAX_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());

        let cents = if let Some((whole, fraction)) = s.split_once('.') {
            if fraction.contains('.') || !fraction.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }

            let whole: i64 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| invalid())?
            };

            let cents: i64 = match fraction.len() {
                0 => 0,
                1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => fraction[..2].parse().map_err(|_| invalid())?,
            };

            whole
                .checked_mul(100)
                .and_then(|w| w.checked_add(cents))
                .ok_or_else(out_of_range)?
        } else {
            s.parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(out_of_range)?
        };

        if cents > Self::MAX_CENTS {
            return Err(out_of_range());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.whole().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.whole(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.format_with_symbol("");
        f.pad(&rendered)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_from_major(value).map_err(serde::de::Error::custom)
    }
}

// Arithmetic saturates at the i64 bounds instead of panicking or wrapping.

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
    FractionalCents(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
            MoneyParseError::FractionalCents(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.whole(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_try_from_major() {
        assert_eq!(Money::try_from_major(12.5).unwrap().cents(), 1250);
        assert_eq!(Money::try_from_major(19.99).unwrap().cents(), 1999);
        assert_eq!(Money::try_from_major(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::try_from_major(-42.07).unwrap().cents(), -4207);
    }

    #[test]
    fn test_try_from_major_rejects_sub_cent() {
        assert!(matches!(
            Money::try_from_major(0.004),
            Err(MoneyParseError::FractionalCents(_))
        ));
        assert!(matches!(
            Money::try_from_major(1000.125),
            Err(MoneyParseError::FractionalCents(_))
        ));
        assert!(matches!(
            Money::try_from_major(-3.005),
            Err(MoneyParseError::FractionalCents(_))
        ));
    }

    #[test]
    fn test_try_from_major_rejects_out_of_range() {
        assert!(matches!(
            Money::try_from_major(1e17),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::try_from_major(f64::NAN).is_err());
        assert!(Money::try_from_major(f64::INFINITY).is_err());

        let max_major = Money::MAX_CENTS as f64 / 100.0;
        assert_eq!(Money::try_from_major(max_major).unwrap().cents(), Money::MAX_CENTS);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(format!("{:>8}", Money::from_cents(5)), "    0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456).format_with_symbol("€"), "€1234.56");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_huge_amounts() {
        assert!(matches!(
            Money::parse("99999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758.07"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("-10000000000001"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(
            Money::parse("10000000000000").unwrap().cents(),
            Money::MAX_CENTS
        );
    }

    #[test]
    fn test_exceeds_limit() {
        assert!(!Money::from_cents(Money::MAX_CENTS).exceeds_limit());
        assert!(!Money::from_cents(-Money::MAX_CENTS).exceeds_limit());
        assert!(Money::from_cents(Money::MAX_CENTS + 1).exceeds_limit());
        assert!(Money::from_cents(i64::MIN).exceeds_limit());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);

        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((-max - Money::from_cents(10)).cents(), i64::MIN);

        let mut total = max;
        total += max;
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1250);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let whole: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(whole.cents(), 500000);
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }

    #[test]
    fn test_deserialize_rejects_inexact_amounts() {
        assert!(serde_json::from_str::<Money>("0.004").is_err());
        assert!(serde_json::from_str::<Money>("1000.125").is_err());
        assert!(serde_json::from_str::<Money>("1e17").is_err());
        assert_eq!(serde_json::from_str::<Money>("1000.12").unwrap().cents(), 100012);
    }
}
