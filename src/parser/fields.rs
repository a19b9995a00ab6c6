//! Field validators
//!
//! One function per semantic field. Each takes the raw text a flag delimited
//! and either returns the normalized value or the error for that field.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenditureCategory, IncomeCategory, Money, CASH};
use crate::storage::CreditCardList;

/// Largest amount any money field accepts ($1,000,000,000.00)
///
/// Keeps list totals and report sums far inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Amount: a number in [0, MAX_AMOUNT]
pub fn parse_amount(raw: &str) -> TrackerResult<Money> {
    non_negative_money(raw).ok_or_else(|| TrackerError::InvalidAmount(raw.trim().to_string()))
}

/// Expenditure category: one of the six fixed names, any case
pub fn parse_category(raw: &str) -> TrackerResult<ExpenditureCategory> {
    ExpenditureCategory::parse(raw).ok_or_else(|| TrackerError::InvalidCategory(raw.trim().to_string()))
}

/// Income category: one of the four fixed names, any case
pub fn parse_income_category(raw: &str) -> TrackerResult<IncomeCategory> {
    IncomeCategory::parse(raw)
        .ok_or_else(|| TrackerError::InvalidIncomeCategory(raw.trim().to_string()))
}

/// Description: anything non-blank
pub fn parse_description(raw: &str) -> TrackerResult<String> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(TrackerError::InvalidDescription);
    }
    Ok(description.to_string())
}

/// Payment method: cash, or the name of a registered credit card
///
/// Returns the canonical spelling: `Cash`, or the card name as it was
/// registered.
pub fn parse_payment_method(raw: &str, cards: &CreditCardList) -> TrackerResult<String> {
    let method = raw.trim();
    if method.eq_ignore_ascii_case(CASH) {
        return Ok(CASH.to_string());
    }
    cards
        .find_by_name(method)
        .map(|card| card.name.clone())
        .ok_or_else(|| TrackerError::UnknownCreditCard(method.to_string()))
}

/// Credit card name: anything non-blank
pub fn parse_card_name(raw: &str) -> TrackerResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TrackerError::InvalidCardName);
    }
    Ok(name.to_string())
}

/// Cashback: a percentage in [0, 100]
pub fn parse_cashback(raw: &str) -> TrackerResult<f64> {
    let raw = raw.trim();
    raw.parse::<f64>()
        .ok()
        .filter(|pct| pct.is_finite() && (0.0..=100.0).contains(pct))
        .ok_or_else(|| TrackerError::InvalidCashback(raw.to_string()))
}

/// Card limit: a positive amount up to MAX_AMOUNT
pub fn parse_card_limit(raw: &str) -> TrackerResult<Money> {
    non_negative_money(raw)
        .filter(Money::is_positive)
        .ok_or_else(|| TrackerError::InvalidCardLimit(raw.trim().to_string()))
}

/// Card balance: an amount in [0, MAX_AMOUNT]; not checked against the limit
pub fn parse_card_balance(raw: &str) -> TrackerResult<Money> {
    non_negative_money(raw).ok_or_else(|| TrackerError::InvalidCardBalance(raw.trim().to_string()))
}

fn non_negative_money(raw: &str) -> Option<Money> {
    Money::parse(raw)
        .ok()
        .filter(|m| !m.is_negative() && *m <= MAX_AMOUNT)
}
