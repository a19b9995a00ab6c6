//! Date normalization
//!
//! Three grammars are accepted, tried in order: `dd/mm/yyyy`, `mm/yyyy` and
//! `yyyy`. Day and month may be written with one digit; the normalized form
//! always zero-pads them, so normalizing twice changes nothing. The
//! granularity of the input is kept.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TrackerError, TrackerResult};

static FULL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid full date pattern"));
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{4})$").expect("valid month-year pattern"));
static YEAR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").expect("valid year pattern"));

/// How specific a date is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Granularity {
    Year,
    Month,
    Day,
}

/// A date at day, month or year granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: i32,
}

/// Why a date string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// Matches none of the three grammars
    Format,
    /// Matches a grammar but names a day or month that does not exist
    Calendar,
}

impl CalendarDate {
    /// Parse and calendar-validate a date in any of the accepted grammars
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let raw = raw.trim();

        if let Some(caps) = FULL_DATE.captures(raw) {
            let day = number(&caps[1])?;
            let month = number(&caps[2])?;
            let year = number(&caps[3])? as i32;
            if !(1..=12).contains(&month) || day == 0 || day > days_in_month(month, year) {
                return Err(DateError::Calendar);
            }
            return Ok(Self {
                day: Some(day),
                month: Some(month),
                year,
            });
        }

        if let Some(caps) = MONTH_YEAR.captures(raw) {
            let month = number(&caps[1])?;
            let year = number(&caps[2])? as i32;
            if !(1..=12).contains(&month) {
                return Err(DateError::Calendar);
            }
            return Ok(Self {
                day: None,
                month: Some(month),
                year,
            });
        }

        if let Some(caps) = YEAR_ONLY.captures(raw) {
            return Ok(Self {
                day: None,
                month: None,
                year: number(&caps[1])? as i32,
            });
        }

        Err(DateError::Format)
    }

    pub fn granularity(&self) -> Granularity {
        match (self.day, self.month) {
            (Some(_), _) => Granularity::Day,
            (None, Some(_)) => Granularity::Month,
            (None, None) => Granularity::Year,
        }
    }

    /// The full calendar date, when this date has day granularity
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month?, self.day?)
    }

    /// Whether a record dated `other` falls within this (query) date
    ///
    /// Every component this date specifies must be present and equal in
    /// `other`; a year query matches all dates in that year, a month query
    /// all dates in that month, a full date only itself.
    pub fn contains(&self, other: &CalendarDate) -> bool {
        if self.year != other.year {
            return false;
        }
        let month_ok = self.month.map_or(true, |m| other.month == Some(m));
        let day_ok = self.day.map_or(true, |d| other.day == Some(d));
        month_ok && day_ok
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(date) = self.to_naive() {
            return write!(f, "{}", date.format("%d/%m/%Y"));
        }
        match self.month {
            Some(month) => write!(f, "{:02}/{:04}", month, self.year),
            None => write!(f, "{:04}", self.year),
        }
    }
}

/// Normalize a record date, rejecting anything that is not a real date
pub fn normalize_date(raw: &str) -> TrackerResult<String> {
    CalendarDate::parse(raw)
        .map(|date| date.to_string())
        .map_err(|_| TrackerError::InvalidDate(raw.trim().to_string()))
}

/// Parse a report query date
///
/// Only the grammar is checked up front. A query that fits a grammar but
/// names an impossible day can never match a stored record, so it reports
/// no matching records.
pub fn parse_query_date(raw: &str) -> TrackerResult<CalendarDate> {
    let raw = raw.trim();
    CalendarDate::parse(raw).map_err(|err| match err {
        DateError::Format => TrackerError::InvalidDateFormat(raw.to_string()),
        DateError::Calendar => TrackerError::NoMatchingRecords(raw.to_string()),
    })
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for an invalid month
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn number(digits: &str) -> Result<u32, DateError> {
    digits.parse().map_err(|_| DateError::Format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_grammars() {
        assert_eq!(normalize_date("01/04/2022").unwrap(), "01/04/2022");
        assert_eq!(normalize_date("04/2022").unwrap(), "04/2022");
        assert_eq!(normalize_date("2022").unwrap(), "2022");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(normalize_date("1/4/2022").unwrap(), "01/04/2022");
        assert_eq!(normalize_date(" 4/2022 ").unwrap(), "04/2022");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["1/1/2020", "29/02/2020", "31/12/1999", "7/2021", "2024"] {
            let once = normalize_date(raw).unwrap();
            assert_eq!(normalize_date(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_calendar_invalid_dates() {
        for raw in ["31/04/2022", "29/02/2021", "30/02/2020", "31/11/2021", "38/14/2022", "00/01/2022", "13/2022", "0/2022"] {
            assert_eq!(
                normalize_date(raw).unwrap_err(),
                TrackerError::InvalidDate(raw.to_string()),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(normalize_date("29/02/2020").unwrap(), "29/02/2020");
        assert_eq!(normalize_date("29/02/2000").unwrap(), "29/02/2000");
        assert!(normalize_date("29/02/1900").is_err());
    }

    #[test]
    fn test_malformed_dates() {
        for raw in ["2022-04-01", "01/04/22", "April 2022", "", "1/2/3/2022", "123/04/2022"] {
            assert!(normalize_date(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_february_length_follows_leap_rule() {
        for year in 1800..=2400 {
            let leap = (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0);
            assert_eq!(days_in_month(2, year) == 29, leap, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month_agrees_with_chrono() {
        for year in [1900, 2000, 2021, 2024] {
            for month in 1..=12 {
                let last = days_in_month(month, year);
                assert!(NaiveDate::from_ymd_opt(year, month, last).is_some());
                assert!(NaiveDate::from_ymd_opt(year, month, last + 1).is_none());
            }
        }
    }

    #[test]
    fn test_query_granularity_matching() {
        let april = parse_query_date("04/2022").unwrap();
        let year = parse_query_date("2022").unwrap();
        let day = parse_query_date("01/04/2022").unwrap();

        let record = CalendarDate::parse("01/04/2022").unwrap();
        let march = CalendarDate::parse("15/03/2022").unwrap();
        let month_only = CalendarDate::parse("04/2022").unwrap();

        assert_eq!(april.granularity(), Granularity::Month);
        assert!(april.contains(&record));
        assert!(!april.contains(&march));
        assert!(april.contains(&month_only));
        assert!(year.contains(&march));
        assert!(day.contains(&record));
        assert!(!day.contains(&month_only));
    }

    #[test]
    fn test_query_format_error() {
        assert_eq!(
            parse_query_date("2022-04").unwrap_err(),
            TrackerError::InvalidDateFormat("2022-04".into())
        );
        assert_eq!(
            parse_query_date("31/04/2022").unwrap_err(),
            TrackerError::NoMatchingRecords("31/04/2022".into())
        );
    }
}
