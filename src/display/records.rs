//! Record display formatting
//!
//! Numbered list views and the confirmation summaries printed after a record
//! is added, updated or deleted.

use crate::models::{CreditCard, Expenditure, Income, Money};
use crate::storage::{CreditCardList, ExpenditureList, IncomeList, LIST_INDEX_CORRECTION};

/// Multi-line summary of an expenditure
pub fn format_expenditure_details(expenditure: &Expenditure, symbol: &str) -> String {
    format!(
        "Description: {}\nAmount: {}\nCategory: {}\nPayment method: {}\nDate: {}\n",
        expenditure.description,
        expenditure.amount.format_with_symbol(symbol),
        expenditure.category,
        expenditure.payment_method,
        expenditure.date
    )
}

/// Multi-line summary of a credit card
pub fn format_credit_card_details(card: &CreditCard, symbol: &str) -> String {
    format!(
        "Credit card: {}\nCash back: {}%\nCard limit: {}\nCard balance: {}\n",
        card.name,
        card.cashback_percent,
        card.limit.format_with_symbol(symbol),
        card.balance.format_with_symbol(symbol)
    )
}

/// Multi-line summary of an income entry
pub fn format_income_details(income: &Income, symbol: &str) -> String {
    format!(
        "Amount: {}\nCategory: {}\n",
        income.amount.format_with_symbol(symbol),
        income.category
    )
}

/// Numbered list of expenditures with a total line
pub fn format_expenditure_list(list: &ExpenditureList, symbol: &str) -> String {
    if list.is_empty() {
        return "Your list of expenditures is empty.\n".to_string();
    }

    let mut output = String::new();
    for (i, e) in list.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} | {} | {} | {} | {}\n",
            i + LIST_INDEX_CORRECTION,
            e.description,
            e.amount.format_with_symbol(symbol),
            e.category,
            e.payment_method,
            e.date
        ));
    }

    let total: Money = list.iter().map(|e| e.amount).sum();
    output.push_str(&format!("Total: {}\n", total.format_with_symbol(symbol)));
    output
}

/// Numbered list of credit cards
pub fn format_credit_card_list(list: &CreditCardList, symbol: &str) -> String {
    if list.is_empty() {
        return "Your list of credit cards is empty.\n".to_string();
    }

    let mut output = String::new();
    for (i, card) in list.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} | {}% cashback | limit {} | balance {}\n",
            i + LIST_INDEX_CORRECTION,
            card.name,
            card.cashback_percent,
            card.limit.format_with_symbol(symbol),
            card.balance.format_with_symbol(symbol)
        ));
    }
    output
}

/// Numbered list of income entries with a total line
pub fn format_income_list(list: &IncomeList, symbol: &str) -> String {
    if list.is_empty() {
        return "Your list of income is empty.\n".to_string();
    }

    let mut output = String::new();
    for (i, income) in list.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} | {}\n",
            i + LIST_INDEX_CORRECTION,
            income.category,
            income.amount.format_with_symbol(symbol)
        ));
    }

    let total: Money = list.iter().map(|i| i.amount).sum();
    output.push_str(&format!("Total: {}\n", total.format_with_symbol(symbol)));
    output
}
