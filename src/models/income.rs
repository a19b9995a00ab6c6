//! Income model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::IncomeCategory;
use super::money::Money;

/// A recorded source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub amount: Money,
    pub category: IncomeCategory,
}

impl Income {
    pub fn new(amount: Money, category: IncomeCategory) -> Self {
        Self { amount, category }
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.category, self.amount)
    }
}
