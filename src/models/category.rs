//! Expense categories
//!
//! A closed set of ten labels. The label text is also the stored form, so the
//! order and spelling here are part of the on-disk format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Saving,
    Housing,
    Insurance,
    Food,
    Transport,
    Utilities,
    Medical,
    Education,
    Entertainment,
    Others,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 10] = [
        Category::Saving,
        Category::Housing,
        Category::Insurance,
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Medical,
        Category::Education,
        Category::Entertainment,
        Category::Others,
    ];

    /// The label shown to users and written to storage
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saving => "Saving",
            Self::Housing => "Housing",
            Self::Insurance => "Insurance",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Medical => "Medical",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Others => "Others",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned for a label outside the fixed category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            Category::ALL
                .iter()
                .map(Category::label)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" TRANSPORT ".parse::<Category>().unwrap(), Category::Transport);
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
        let back: Category = serde_json::from_str("\"Housing\"").unwrap();
        assert_eq!(back, Category::Housing);
    }

    #[test]
    fn test_unknown_label_fails_to_deserialize() {
        assert!(serde_json::from_str::<Category>("\"Pets\"").is_err());
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(Category::default(), Category::Saving);
    }
}
