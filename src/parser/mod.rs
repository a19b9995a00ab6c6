//! Command-line field parsing
//!
//! - `flags`: flag tokens and the tokenizer that slices a line into fields
//! - `fields`: one validator per semantic field
//! - `date`: the three date grammars and calendar validation
//! - `records`: whole expenditure / credit card / income parsing

pub mod date;
pub mod fields;
pub mod flags;
pub mod records;

pub use date::{days_in_month, is_leap_year, normalize_date, parse_query_date, CalendarDate, Granularity};
pub use flags::{extract_field, has_flag, starts_with_flag, Boundary};
pub use records::{parse_credit_card, parse_expenditure, parse_income, BalanceField};
