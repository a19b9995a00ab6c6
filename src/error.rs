//! Custom error types for MindMyMoney
//!
//! Every command failure is a local validation error: the shell prints the
//! message and reads the next line. Only `Config` and `Io` can surface from
//! start-up.

use thiserror::Error;

/// The main error type for tracker operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// A required flag is absent from the command line
    #[error("Missing flag {flag}! Type \"help\" to see the expected format.")]
    MissingFlag { flag: &'static str },

    /// Amount is not a number between 0 and the amount cap
    #[error("Amount must be a number from 0 to 1000000000, got \"{0}\"")]
    InvalidAmount(String),

    /// Expenditure category is not one of the fixed names
    #[error(
        "Invalid category \"{0}\"! Choose one of: Food, Transport, Utilities, Personal, Entertainment, Others"
    )]
    InvalidCategory(String),

    /// Income category is not one of the fixed names
    #[error("Invalid income category \"{0}\"! Choose one of: Salary, Allowance, Investments, Others")]
    InvalidIncomeCategory(String),

    /// Description is blank
    #[error("Description cannot be empty!")]
    InvalidDescription,

    /// Payment method references a card that is not registered
    #[error("Credit card \"{0}\" not found! Add it first with \"add /cc\" or pay with cash.")]
    UnknownCreditCard(String),

    /// Credit card name is blank
    #[error("Credit card name cannot be empty!")]
    InvalidCardName,

    /// Cashback is not within [0, 100]
    #[error("Cashback must be a number between 0 and 100, got \"{0}\"")]
    InvalidCashback(String),

    /// Card limit is not a positive number
    #[error("Card limit must be a number greater than 0 and at most 1000000000, got \"{0}\"")]
    InvalidCardLimit(String),

    /// Card balance is not a number between 0 and the amount cap
    #[error("Card balance must be a number from 0 to 1000000000, got \"{0}\"")]
    InvalidCardBalance(String),

    /// A stored record date failed parsing or calendar validation
    #[error("Invalid date \"{0}\"! Dates must be a real calendar date in dd/mm/yyyy, mm/yyyy or yyyy format.")]
    InvalidDate(String),

    /// A report query date does not match any accepted pattern
    #[error("Date has to be in \"dd/mm/yyyy\", \"mm/yyyy\" or \"yyyy\" format!")]
    InvalidDateFormat(String),

    /// Display index is non-numeric or outside the list
    #[error("{kind} index \"{index}\" is out of range! Use \"list\" to see valid indexes.")]
    IndexOutOfRange { kind: &'static str, index: String },

    /// Update would leave the record unchanged
    #[error("The new {0} is identical to the existing one, nothing was updated.")]
    NoChange(&'static str),

    /// Report query matched nothing (or only zero amounts)
    #[error("Date \"{0}\" not found in the list! Do check your input")]
    NoMatchingRecords(String),

    /// First word of the line is not a known command
    #[error("Unknown command \"{0}\"! Type \"help\" to see the list of commands.")]
    UnknownCommand(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl TrackerError {
    /// Create an out-of-range error for the given record kind
    pub fn index_out_of_range(kind: &'static str, index: impl Into<String>) -> Self {
        Self::IndexOutOfRange {
            kind,
            index: index.into(),
        }
    }

    /// Check if this is a missing-flag error
    pub fn is_missing_flag(&self) -> bool {
        matches!(self, Self::MissingFlag { .. })
    }

    /// Check if this is a date error of either flavour
    pub fn is_date_error(&self) -> bool {
        matches!(self, Self::InvalidDate(_) | Self::InvalidDateFormat(_))
    }

    /// Check if the error came from user input rather than the environment
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::MissingFlag { flag: "/a" };
        assert_eq!(
            err.to_string(),
            "Missing flag /a! Type \"help\" to see the expected format."
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let err = TrackerError::index_out_of_range("Expenditure", "7");
        assert_eq!(
            err.to_string(),
            "Expenditure index \"7\" is out of range! Use \"list\" to see valid indexes."
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_date_errors() {
        assert!(TrackerError::InvalidDate("31/04/2022".into()).is_date_error());
        assert!(TrackerError::InvalidDateFormat("2022-04".into()).is_date_error());
        assert!(!TrackerError::InvalidDescription.is_date_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
        assert!(!err.is_validation());
    }
}
