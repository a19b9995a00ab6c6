//! List command
//!
//! `list` or `list /e` for expenditures, `list /cc` for credit cards,
//! `list /i` for income.

use crate::config::Settings;
use crate::display::{format_credit_card_list, format_expenditure_list, format_income_list};
use crate::error::TrackerResult;
use crate::parser::flags::{FLAG_OF_CREDIT_CARD, FLAG_OF_INCOME};
use crate::parser::starts_with_flag;
use crate::storage::Storage;

/// Handle a list command
pub fn handle_list_command(storage: &Storage, settings: &Settings, args: &str) -> TrackerResult<String> {
    let symbol = &settings.currency_symbol;

    let output = if starts_with_flag(args, FLAG_OF_CREDIT_CARD) {
        format_credit_card_list(&storage.credit_cards, symbol)
    } else if starts_with_flag(args, FLAG_OF_INCOME) {
        format_income_list(&storage.incomes, symbol)
    } else {
        format_expenditure_list(&storage.expenditures, symbol)
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handle_add_command;

    #[test]
    fn test_list_each_kind() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        handle_add_command(&mut storage, &settings, "/cc /n DBS /cb 1 /cl 500 /bal 0").unwrap();
        handle_add_command(&mut storage, &settings, "/pm dbs /c Food /d lunch /a 8 /t 02/04/2022").unwrap();

        let expenditures = handle_list_command(&storage, &settings, "").unwrap();
        assert_eq!(expenditures, handle_list_command(&storage, &settings, "/e").unwrap());
        assert!(expenditures.starts_with("1. lunch | $8.00 | Food | DBS | 02/04/2022"));

        let cards = handle_list_command(&storage, &settings, "/cc").unwrap();
        assert!(cards.starts_with("1. DBS"));

        let incomes = handle_list_command(&storage, &settings, "/i").unwrap();
        assert_eq!(incomes, "Your list of income is empty.\n");
    }
}
