//! Core data models for MindMyMoney
//!
//! Plain value records for expenditures, credit cards and income, plus the
//! fixed category sets and the cents-based `Money` type.

pub mod category;
pub mod credit_card;
pub mod expenditure;
pub mod income;
pub mod money;

pub use category::{ExpenditureCategory, IncomeCategory, UnknownCategory};
pub use credit_card::CreditCard;
pub use expenditure::{Expenditure, CASH};
pub use income::Income;
pub use money::{Money, MoneyParseError};
