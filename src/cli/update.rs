//! Update command
//!
//! `update /e <index> /pm <method> /c <category> /d <description> /a <amount> /t <date>`
//! `update /cc <index> /n <name> /cb <cashback> /cl <limit> [/bal <balance>]`
//! `update /i <index> /a <amount> /c <category>`

use crate::config::Settings;
use crate::display::{format_credit_card_details, format_expenditure_details, format_income_details};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CreditCard, Expenditure, Income};
use crate::parser::flags::{
    FLAG_OF_AMOUNT, FLAG_OF_CARD_NAME, FLAG_OF_CREDIT_CARD, FLAG_OF_EXPENDITURE, FLAG_OF_INCOME,
    FLAG_OF_PAYMENT_METHOD,
};
use crate::parser::{
    extract_field, parse_credit_card, parse_expenditure, parse_income, BalanceField, Boundary,
    starts_with_flag,
};
use crate::services::RecordService;
use crate::storage::{Record, Storage};

/// Handle an update command
///
/// The index is checked before any field is parsed, so an out-of-range index
/// is reported even when the fields are also wrong.
pub fn handle_update_command(storage: &mut Storage, settings: &Settings, args: &str) -> TrackerResult<String> {
    let symbol = &settings.currency_symbol;

    let (kind, index, details) = if starts_with_flag(args, FLAG_OF_CREDIT_CARD) {
        let index = extract_field(args, FLAG_OF_CREDIT_CARD, Boundary::Flag(FLAG_OF_CARD_NAME))?;
        storage.credit_cards.resolve_index(&index)?;

        let card = parse_credit_card(args, BalanceField::Optional)?;
        let details = format_credit_card_details(&card, symbol);
        RecordService::new(&mut storage.credit_cards).update(&index, card)?;
        (CreditCard::KIND, index, details)
    } else if starts_with_flag(args, FLAG_OF_INCOME) {
        let index = extract_field(args, FLAG_OF_INCOME, Boundary::Flag(FLAG_OF_AMOUNT))?;
        storage.incomes.resolve_index(&index)?;

        let income = parse_income(args)?;
        let details = format_income_details(&income, symbol);
        RecordService::new(&mut storage.incomes).update(&index, income)?;
        (Income::KIND, index, details)
    } else if starts_with_flag(args, FLAG_OF_EXPENDITURE) {
        let index = extract_field(args, FLAG_OF_EXPENDITURE, Boundary::Flag(FLAG_OF_PAYMENT_METHOD))?;
        storage.expenditures.resolve_index(&index)?;

        let expenditure = parse_expenditure(args, &storage.credit_cards)?;
        let details = format_expenditure_details(&expenditure, symbol);
        RecordService::new(&mut storage.expenditures).update(&index, expenditure)?;
        (Expenditure::KIND, index, details)
    } else {
        return Err(TrackerError::MissingFlag {
            flag: FLAG_OF_EXPENDITURE,
        });
    };

    Ok(format!(
        "Successfully updated {} {}: \n\n{}\n",
        kind.to_lowercase(),
        index,
        details
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handle_add_command;
    use crate::models::{ExpenditureCategory, IncomeCategory, Money};

    fn run(storage: &mut Storage, args: &str) -> TrackerResult<String> {
        handle_update_command(storage, &Settings::default(), args)
    }

    fn with_porridge() -> Storage {
        let mut storage = Storage::new();
        handle_add_command(
            &mut storage,
            &Settings::default(),
            "/pm cash /c Food /d porridge /a 5 /t 01/04/2022",
        )
        .unwrap();
        storage
    }

    #[test]
    fn test_update_expenditure() {
        let mut storage = with_porridge();
        let output = run(&mut storage, "/e 1 /pm cash /c Others /d chicken rice /a 4.50 /t 01/05/2021").unwrap();

        assert!(output.starts_with("Successfully updated expenditure 1"));
        assert_eq!(storage.expenditures.len(), 1);
        assert_eq!(
            storage.expenditures.get(0),
            Some(&Expenditure::new("Cash", ExpenditureCategory::Others, "chicken rice", Money::from_cents(450), "01/05/2021"))
        );
    }

    #[test]
    fn test_identical_update_is_no_change() {
        let mut storage = with_porridge();
        let before = storage.clone();

        let err = run(&mut storage, "/e 1 /pm CASH /c food /d porridge /a 5.00 /t 1/4/2022").unwrap_err();
        assert_eq!(err, TrackerError::NoChange("Expenditure"));
        assert_eq!(storage, before);
    }

    #[test]
    fn test_index_checked_before_fields() {
        let mut storage = with_porridge();
        let err = run(&mut storage, "/e 2 /pm cash /c Snacks /d x /a 1 /t 2022").unwrap_err();
        assert_eq!(err, TrackerError::index_out_of_range("Expenditure", "2"));

        let err = run(&mut storage, "/e one /pm cash /c Food /d x /a 1 /t 2022").unwrap_err();
        assert_eq!(err, TrackerError::index_out_of_range("Expenditure", "one"));

        let err = run(&mut storage, "/e 0 /pm cash /c Food /d x /a 1 /t 2022").unwrap_err();
        assert_eq!(err, TrackerError::index_out_of_range("Expenditure", "0"));
    }

    #[test]
    fn test_update_credit_card() {
        let mut storage = Storage::new();
        handle_add_command(&mut storage, &Settings::default(), "/cc /n DBS /cb 5 /cl 2000 /bal 500").unwrap();

        let err = run(&mut storage, "/cc 1 /n DBS /cb 5 /cl 2000 /bal 500").unwrap_err();
        assert_eq!(err, TrackerError::NoChange("Credit card"));

        run(&mut storage, "/cc 1 /n OCBC /cb 1.5 /cl 3000").unwrap();
        assert_eq!(
            storage.credit_cards.get(0),
            Some(&CreditCard::new("OCBC", 1.5, Money::from_cents(300_000), Money::from_cents(300_000)))
        );
    }

    #[test]
    fn test_update_income() {
        let mut storage = Storage::new();
        handle_add_command(&mut storage, &Settings::default(), "/i /a 3000 /c salary").unwrap();

        let err = run(&mut storage, "/i 1 /a 3000 /c Salary").unwrap_err();
        assert_eq!(err, TrackerError::NoChange("Income"));

        run(&mut storage, "/i 1 /a 500 /c allowance").unwrap();
        assert_eq!(
            storage.incomes.get(0),
            Some(&Income::new(Money::from_cents(50_000), IncomeCategory::Allowance))
        );
    }

    #[test]
    fn test_kind_flags_inside_description_are_text() {
        let mut storage = with_porridge();
        run(&mut storage, "/e 1 /pm cash /c Others /d refund /i /cc slip /a 1 /t 2022").unwrap();
        assert_eq!(storage.expenditures.get(0).unwrap().description, "refund /i /cc slip");
    }

    #[test]
    fn test_missing_kind_flag() {
        let mut storage = with_porridge();
        let err = run(&mut storage, "1 /pm cash /c Food /d x /a 1 /t 2022").unwrap_err();
        assert!(err.is_missing_flag());
    }
}
