//! Delete command
//!
//! `delete /e <index>`, `delete /cc <index>`, `delete /i <index>`

use crate::config::Settings;
use crate::display::{format_credit_card_details, format_expenditure_details, format_income_details};
use crate::error::{TrackerError, TrackerResult};
use crate::parser::flags::{FLAG_OF_CREDIT_CARD, FLAG_OF_EXPENDITURE, FLAG_OF_INCOME};
use crate::parser::{extract_field, starts_with_flag, Boundary};
use crate::services::RecordService;
use crate::storage::Storage;

/// Handle a delete command
pub fn handle_delete_command(storage: &mut Storage, settings: &Settings, args: &str) -> TrackerResult<String> {
    let symbol = &settings.currency_symbol;

    let details = if starts_with_flag(args, FLAG_OF_CREDIT_CARD) {
        let index = extract_field(args, FLAG_OF_CREDIT_CARD, Boundary::EndOfInput)?;
        let card = RecordService::new(&mut storage.credit_cards).delete(&index)?;
        format_credit_card_details(&card, symbol)
    } else if starts_with_flag(args, FLAG_OF_INCOME) {
        let index = extract_field(args, FLAG_OF_INCOME, Boundary::EndOfInput)?;
        let income = RecordService::new(&mut storage.incomes).delete(&index)?;
        format_income_details(&income, symbol)
    } else if starts_with_flag(args, FLAG_OF_EXPENDITURE) {
        let index = extract_field(args, FLAG_OF_EXPENDITURE, Boundary::EndOfInput)?;
        let expenditure = RecordService::new(&mut storage.expenditures).delete(&index)?;
        format_expenditure_details(&expenditure, symbol)
    } else {
        return Err(TrackerError::MissingFlag {
            flag: FLAG_OF_EXPENDITURE,
        });
    };

    Ok(format!("Successfully deleted: \n\n{}\nfrom the account\n", details))
}
