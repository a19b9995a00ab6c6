//! Credit card model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A registered credit card that expenditures can be charged to
///
/// `balance <= limit` is expected but not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub name: String,

    /// Cashback percentage in [0, 100]
    pub cashback_percent: f64,

    pub limit: Money,

    pub balance: Money,
}

impl CreditCard {
    /// Create a new credit card
    pub fn new(name: impl Into<String>, cashback_percent: f64, limit: Money, balance: Money) -> Self {
        Self {
            name: name.into(),
            cashback_percent,
            limit,
            balance,
        }
    }

    /// Create a card whose whole limit is still available
    pub fn unused(name: impl Into<String>, cashback_percent: f64, limit: Money) -> Self {
        Self::new(name, cashback_percent, limit, limit)
    }

    /// Case-insensitive name comparison used when resolving payment methods
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}% cashback - limit {} - balance {}",
            self.name, self.cashback_percent, self.limit, self.balance
        )
    }
}
