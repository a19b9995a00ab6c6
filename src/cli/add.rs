//! Add command
//!
//! `add [/e] /pm <method> /c <category> /d <description> /a <amount> /t <date>`
//! `add /cc /n <name> /cb <cashback> /cl <limit> /bal <balance>`
//! `add /i /a <amount> /c <category>`

use crate::config::Settings;
use crate::display::{format_credit_card_details, format_expenditure_details, format_income_details};
use crate::error::TrackerResult;
use crate::parser::flags::{FLAG_OF_CREDIT_CARD, FLAG_OF_INCOME};
use crate::parser::{parse_credit_card, parse_expenditure, parse_income, BalanceField, starts_with_flag};
use crate::services::RecordService;
use crate::storage::Storage;

/// Handle an add command
pub fn handle_add_command(storage: &mut Storage, settings: &Settings, args: &str) -> TrackerResult<String> {
    let symbol = &settings.currency_symbol;

    let details = if starts_with_flag(args, FLAG_OF_CREDIT_CARD) {
        let card = parse_credit_card(args, BalanceField::Required)?;
        let details = format_credit_card_details(&card, symbol);
        RecordService::new(&mut storage.credit_cards).add(card);
        details
    } else if starts_with_flag(args, FLAG_OF_INCOME) {
        let income = parse_income(args)?;
        let details = format_income_details(&income, symbol);
        RecordService::new(&mut storage.incomes).add(income);
        details
    } else {
        let expenditure = parse_expenditure(args, &storage.credit_cards)?;
        let details = format_expenditure_details(&expenditure, symbol);
        RecordService::new(&mut storage.expenditures).add(expenditure);
        details
    };

    Ok(format!("Successfully added: \n\n{}\ninto the account\n", details))
}
