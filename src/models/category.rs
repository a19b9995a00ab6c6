//! Expenditure and income categories
//!
//! Both category sets are fixed. Parsing is case-insensitive; display always
//! uses the title-cased name, so `food` and `Food` are the same category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenditureCategory {
    Food,
    Transport,
    Utilities,
    Personal,
    Entertainment,
    Others,
}

impl ExpenditureCategory {
    /// All categories in report display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Personal,
            Self::Entertainment,
            Self::Others,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Personal => "Personal",
            Self::Entertainment => "Entertainment",
            Self::Others => "Others",
        }
    }

    /// Parse a category name, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl FromStr for ExpenditureCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

impl fmt::Display for ExpenditureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classification of an income entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Allowance,
    Investments,
    Others,
}

impl IncomeCategory {
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Allowance,
            Self::Investments,
            Self::Others,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Allowance => "Allowance",
            Self::Investments => "Investments",
            Self::Others => "Others",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl FromStr for IncomeCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A category name that is not part of the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<_> = ExpenditureCategory::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["Food", "Transport", "Utilities", "Personal", "Entertainment", "Others"]
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ExpenditureCategory::parse("food"), Some(ExpenditureCategory::Food));
        assert_eq!(ExpenditureCategory::parse(" OTHERS "), Some(ExpenditureCategory::Others));
        assert_eq!(ExpenditureCategory::parse("Person"), None);
        assert_eq!(IncomeCategory::parse("salary"), Some(IncomeCategory::Salary));
        assert_eq!(IncomeCategory::parse("Food"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "Groceries".parse::<ExpenditureCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("Groceries".into()));
    }
}
