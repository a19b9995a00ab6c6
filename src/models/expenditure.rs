//! Expenditure model
//!
//! An expenditure has no id of its own; it is identified by its position in
//! the expenditure list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenditureCategory;
use super::money::Money;

/// Payment method literal that does not reference a credit card
pub const CASH: &str = "Cash";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenditure {
    /// "Cash" or the registered name of the credit card used
    pub payment_method: String,

    pub category: ExpenditureCategory,

    pub description: String,

    pub amount: Money,

    /// Normalized date at day, month or year granularity
    pub date: String,
}

impl Expenditure {
    /// Create a new expenditure
    pub fn new(
        payment_method: impl Into<String>,
        category: ExpenditureCategory,
        description: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
    ) -> Self {
        Self {
            payment_method: payment_method.into(),
            category,
            description: description.into(),
            amount,
            date: date.into(),
        }
    }

    /// Whether this expenditure was paid in cash
    pub fn is_cash(&self) -> bool {
        self.payment_method.eq_ignore_ascii_case(CASH)
    }
}

impl fmt::Display for Expenditure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {} - {}",
            self.payment_method,
            self.category,
            self.description,
            self.amount,
            self.date
        )
    }
}
