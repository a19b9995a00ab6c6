//! Whole-record parsing
//!
//! Reads every field of a record in its fixed order, validating each one
//! before the next is read, so the first invalid field from the left is the
//! one reported.

use tracing::debug;

use super::date::normalize_date;
use super::fields::{
    parse_amount, parse_card_balance, parse_card_limit, parse_card_name, parse_cashback,
    parse_category, parse_description, parse_income_category, parse_payment_method,
};
use super::flags::{
    extract_field, has_flag, Boundary, FLAG_OF_AMOUNT, FLAG_OF_CARD_BALANCE, FLAG_OF_CARD_LIMIT,
    FLAG_OF_CARD_NAME, FLAG_OF_CASHBACK, FLAG_OF_CATEGORY, FLAG_OF_DESCRIPTION,
    FLAG_OF_PAYMENT_METHOD, FLAG_OF_TIME,
};
use crate::error::TrackerResult;
use crate::models::{CreditCard, Expenditure, Income};
use crate::storage::CreditCardList;

/// Whether the `/bal` field must be present on a credit card line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceField {
    Required,
    /// When absent the balance equals the limit
    Optional,
}

/// Parse `/pm <method> /c <category> /d <description> /a <amount> /t <date>`
pub fn parse_expenditure(line: &str, cards: &CreditCardList) -> TrackerResult<Expenditure> {
    let raw = extract_field(line, FLAG_OF_PAYMENT_METHOD, Boundary::Flag(FLAG_OF_CATEGORY))?;
    let payment_method = parse_payment_method(&raw, cards)?;

    let raw = extract_field(line, FLAG_OF_CATEGORY, Boundary::Flag(FLAG_OF_DESCRIPTION))?;
    let category = parse_category(&raw)?;

    let raw = extract_field(line, FLAG_OF_DESCRIPTION, Boundary::Flag(FLAG_OF_AMOUNT))?;
    let description = parse_description(&raw)?;

    let raw = extract_field(line, FLAG_OF_AMOUNT, Boundary::Flag(FLAG_OF_TIME))?;
    let amount = parse_amount(&raw)?;

    let raw = extract_field(line, FLAG_OF_TIME, Boundary::EndOfInput)?;
    let date = normalize_date(&raw)?;

    debug!(%payment_method, %category, %description, %amount, %date, "parsed expenditure");
    Ok(Expenditure::new(payment_method, category, description, amount, date))
}

/// Parse `/n <name> /cb <cashback> /cl <limit> /bal <balance>`
pub fn parse_credit_card(line: &str, balance: BalanceField) -> TrackerResult<CreditCard> {
    let raw = extract_field(line, FLAG_OF_CARD_NAME, Boundary::Flag(FLAG_OF_CASHBACK))?;
    let name = parse_card_name(&raw)?;

    let raw = extract_field(line, FLAG_OF_CASHBACK, Boundary::Flag(FLAG_OF_CARD_LIMIT))?;
    let cashback = parse_cashback(&raw)?;

    let has_balance = has_flag(line, FLAG_OF_CARD_BALANCE);
    let card = if has_balance || balance == BalanceField::Required {
        let raw = extract_field(line, FLAG_OF_CARD_LIMIT, Boundary::Flag(FLAG_OF_CARD_BALANCE))?;
        let limit = parse_card_limit(&raw)?;
        let raw = extract_field(line, FLAG_OF_CARD_BALANCE, Boundary::EndOfInput)?;
        let balance = parse_card_balance(&raw)?;
        CreditCard::new(name, cashback, limit, balance)
    } else {
        let raw = extract_field(line, FLAG_OF_CARD_LIMIT, Boundary::EndOfInput)?;
        CreditCard::unused(name, cashback, parse_card_limit(&raw)?)
    };

    debug!(name = %card.name, cashback = card.cashback_percent, limit = %card.limit, balance = %card.balance, "parsed credit card");
    Ok(card)
}

/// Parse `/a <amount> /c <category>`
pub fn parse_income(line: &str) -> TrackerResult<Income> {
    let raw = extract_field(line, FLAG_OF_AMOUNT, Boundary::Flag(FLAG_OF_CATEGORY))?;
    let amount = parse_amount(&raw)?;

    let raw = extract_field(line, FLAG_OF_CATEGORY, Boundary::EndOfInput)?;
    let category = parse_income_category(&raw)?;

    debug!(%amount, %category, "parsed income");
    Ok(Income::new(amount, category))
}
