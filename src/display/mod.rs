//! Display formatting for terminal output
//!
//! Turns records and reports into the plain text the shell prints.

pub mod records;
pub mod report;

pub use records::{
    format_credit_card_details, format_credit_card_list, format_expenditure_details,
    format_expenditure_list, format_income_details, format_income_list,
};
pub use report::{format_bar, format_percentage, left_align, separator};
