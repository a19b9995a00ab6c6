//! Money type for representing currency amounts
//!
//! Amounts are whole cents (i64), so every amount carries exactly two decimal
//! places and comparing two records never trips over float noise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A monetary amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use mindmymoney::models::Money;
    /// let lunch = Money::from_cents(450);
    /// assert_eq!(lunch.format_with_symbol("$"), "$4.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts an optional leading sign, digits, and an optional fraction
    /// (`5`, `4.5`, `4.50`, `.5`, `5.`). The third decimal rounds the second
    /// half-up; later digits are ignored. Exponents, symbols, separators and
    /// values that overflow are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let text = s.trim();
        let reject = || MoneyParseError(text.to_string());

        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, text.strip_prefix('+').unwrap_or(text)),
        };
        let (units, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (units.is_empty() && fraction.is_empty()) || !all_digits(units) || !all_digits(fraction) {
            return Err(reject());
        }

        let units: i64 = if units.is_empty() { 0 } else { units.parse().map_err(|_| reject())? };

        let digit = |i: usize| fraction.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let round_up = i64::from(digit(2) >= 5);
        let fraction_cents = digit(0) * 10 + digit(1) + round_up;

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .map(|cents| Self(sign * cents))
            .ok_or_else(reject)
    }

    /// Format with a currency symbol and two decimals ("$4.50", "-$4.50")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Text that is not a money amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyParseError(pub String);

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not an amount", self.0)
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(s: &str) -> i64 {
        Money::parse(s).unwrap().cents()
    }

    #[test]
    fn test_format() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("S$"), "S$0.05");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(cents("10.50"), 1050);
        assert_eq!(cents("-10.50"), -1050);
        assert_eq!(cents("+5"), 500);
        assert_eq!(cents("10"), 1000);
        assert_eq!(cents("4.5"), 450);
        assert_eq!(cents(" .5 "), 50);
        assert_eq!(cents("5."), 500);
    }

    #[test]
    fn test_third_decimal_rounds() {
        assert_eq!(cents("4.555"), 456);
        assert_eq!(cents("4.554"), 455);
        assert_eq!(cents("0.999"), 100);
        assert_eq!(cents("1.2349"), 123);
    }

    #[test]
    fn test_rejects_non_amounts() {
        for input in ["", ".", "-", "+", "+-5", "-+5", "abc", "4.5a", "1e3", "$5", "4..5", "5 5", "€5", "99999999999999999999"] {
            assert!(Money::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_sum_of_refs() {
        let amounts = [Money::from_cents(100), Money::from_cents(250)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::from_cents(350));
    }

    #[test]
    fn test_serializes_as_cents() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "1050");
    }
}
