//! Reports module for MindMyMoney
//!
//! Currently a single report: the per-category spending breakdown.

pub mod spending;

pub use spending::{calculate_expenditure_per_month, SpendingByCategory, SpendingReport};
