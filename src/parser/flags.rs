//! Flag tokens and the field tokenizer
//!
//! A command line is partitioned by flags into ordered fields, e.g.
//! `/pm cash /c food /d porridge /a 5 /t 01/04/2022`. A flag only counts when
//! it stands as its own whitespace-delimited token, so `/c` never matches
//! inside `/cc` or inside a description like `a/c repair`.

use crate::error::{TrackerError, TrackerResult};

pub const FLAG_OF_EXPENDITURE: &str = "/e";
pub const FLAG_OF_CREDIT_CARD: &str = "/cc";
pub const FLAG_OF_INCOME: &str = "/i";

pub const FLAG_OF_PAYMENT_METHOD: &str = "/pm";
pub const FLAG_OF_CATEGORY: &str = "/c";
pub const FLAG_OF_DESCRIPTION: &str = "/d";
pub const FLAG_OF_AMOUNT: &str = "/a";
pub const FLAG_OF_TIME: &str = "/t";

pub const FLAG_OF_CARD_NAME: &str = "/n";
pub const FLAG_OF_CASHBACK: &str = "/cb";
pub const FLAG_OF_CARD_LIMIT: &str = "/cl";
pub const FLAG_OF_CARD_BALANCE: &str = "/bal";

pub const FLAG_OF_EXPENDITURE_PER_MONTH: &str = "/epm";

/// Where a field stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The field ends where this flag starts
    Flag(&'static str),
    /// The field runs to the end of the line
    EndOfInput,
}

/// Whether `flag` appears as a standalone token anywhere in `line`
pub fn has_flag(line: &str, flag: &str) -> bool {
    find_flag(line, flag, 0).is_some()
}

/// Whether the first token of `line` is `flag`
///
/// Record-kind flags (`/e`, `/cc`, `/i`) are only honoured in this position,
/// so a description that happens to contain one stays a description.
pub fn starts_with_flag(line: &str, flag: &str) -> bool {
    line.split_whitespace().next() == Some(flag)
}

/// Extract the trimmed text between `start_flag` and `end`
///
/// The end flag is searched for only after the start flag. A missing start
/// flag, or an end flag that does not follow it, is a `MissingFlag` error.
pub fn extract_field(line: &str, start_flag: &'static str, end: Boundary) -> TrackerResult<String> {
    let (_, value_start) = find_flag(line, start_flag, 0)
        .ok_or(TrackerError::MissingFlag { flag: start_flag })?;

    let value_end = match end {
        Boundary::EndOfInput => line.len(),
        Boundary::Flag(end_flag) => find_flag(line, end_flag, value_start)
            .map(|(flag_start, _)| flag_start)
            .ok_or(TrackerError::MissingFlag { flag: end_flag })?,
    };

    Ok(line[value_start..value_end].trim().to_string())
}

/// Locate `flag` as a whole token at or after byte offset `from`.
/// Returns the byte range of the flag itself.
fn find_flag(line: &str, flag: &str, from: usize) -> Option<(usize, usize)> {
    let haystack = line.get(from..)?;
    haystack
        .match_indices(flag)
        .map(|(offset, _)| (from + offset, from + offset + flag.len()))
        .find(|&(start, end)| {
            let before_ok = line[..start]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            let after_ok = line[end..].chars().next().map_or(true, char::is_whitespace);
            before_ok && after_ok
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "/pm cash /c Food /d porridge /a 5 /t 01/04/2022";

    #[test]
    fn test_extract_between_flags() {
        assert_eq!(
            extract_field(LINE, FLAG_OF_PAYMENT_METHOD, Boundary::Flag(FLAG_OF_CATEGORY)).unwrap(),
            "cash"
        );
        assert_eq!(
            extract_field(LINE, FLAG_OF_DESCRIPTION, Boundary::Flag(FLAG_OF_AMOUNT)).unwrap(),
            "porridge"
        );
        assert_eq!(
            extract_field(LINE, FLAG_OF_TIME, Boundary::EndOfInput).unwrap(),
            "01/04/2022"
        );
    }

    #[test]
    fn test_missing_start_flag() {
        let err = extract_field("/pm cash", FLAG_OF_AMOUNT, Boundary::EndOfInput).unwrap_err();
        assert_eq!(err, TrackerError::MissingFlag { flag: "/a" });
    }

    #[test]
    fn test_end_flag_must_follow_start() {
        let err = extract_field("/t 2022 /a 5", FLAG_OF_AMOUNT, Boundary::Flag(FLAG_OF_TIME))
            .unwrap_err();
        assert_eq!(err, TrackerError::MissingFlag { flag: "/t" });
    }

    #[test]
    fn test_kind_flag_only_counts_first() {
        assert!(starts_with_flag("  /cc /n DBS", FLAG_OF_CREDIT_CARD));
        assert!(!starts_with_flag("/pm cash /c Food /d /cc fee /a 1 /t 2022", FLAG_OF_CREDIT_CARD));
        assert!(!starts_with_flag("/ccx", FLAG_OF_CREDIT_CARD));
        assert!(!starts_with_flag("", FLAG_OF_INCOME));
    }

    #[test]
    fn test_flags_match_whole_tokens_only() {
        let line = "/cc /n DBS /cb 2 /cl 1000 /bal 50";
        assert!(has_flag(line, FLAG_OF_CREDIT_CARD));
        assert!(!has_flag(line, FLAG_OF_CATEGORY));
        assert_eq!(
            extract_field(line, FLAG_OF_CASHBACK, Boundary::Flag(FLAG_OF_CARD_LIMIT)).unwrap(),
            "2"
        );

        let line = "/pm cash /c Utilities /d a/c repair /a 80 /t 2022";
        assert_eq!(
            extract_field(line, FLAG_OF_DESCRIPTION, Boundary::Flag(FLAG_OF_AMOUNT)).unwrap(),
            "a/c repair"
        );
    }

    #[test]
    fn test_empty_field_is_returned_empty() {
        assert_eq!(
            extract_field("/d   /a 5", FLAG_OF_DESCRIPTION, Boundary::Flag(FLAG_OF_AMOUNT)).unwrap(),
            ""
        );
    }
}
