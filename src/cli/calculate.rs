//! Calculate command
//!
//! `calculate /epm <dd/mm/yyyy | mm/yyyy | yyyy>`

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::parser::flags::FLAG_OF_EXPENDITURE_PER_MONTH;
use crate::parser::{extract_field, Boundary};
use crate::reports::calculate_expenditure_per_month;
use crate::storage::Storage;

/// Handle a calculate command
pub fn handle_calculate_command(storage: &Storage, settings: &Settings, args: &str) -> TrackerResult<String> {
    let query = extract_field(args, FLAG_OF_EXPENDITURE_PER_MONTH, Boundary::EndOfInput)?;
    calculate_expenditure_per_month(&query, &storage.expenditures, settings)
}
