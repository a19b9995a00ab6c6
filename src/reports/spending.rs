//! Spending Report
//!
//! Breaks down the expenditures of a day, month or year by category.

use tracing::debug;

use crate::config::Settings;
use crate::display::report::{format_bar, format_percentage, left_align, separator, LABEL_WIDTH, LINE_WIDTH};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expenditure, ExpenditureCategory, Money};
use crate::parser::date::{parse_query_date, CalendarDate};

/// Share of one category in the matched total
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: ExpenditureCategory,
    pub total_spending: Money,
    /// Percentage of the matched total, rounded to two decimals
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// The query as typed (trimmed)
    pub query: String,
    pub total_spending: Money,
    pub matched_count: usize,
    /// One row per category, in display order, including zero rows
    pub categories: Vec<SpendingByCategory>,
}

impl SpendingReport {
    /// Generate the breakdown for `query` over `expenditures`
    ///
    /// Fails with `InvalidDateFormat` when the query fits no date grammar and
    /// with `NoMatchingRecords` when the matched amounts sum to zero, which
    /// also covers matching nothing at all.
    pub fn generate<'a, I>(query: &str, expenditures: I) -> TrackerResult<Self>
    where
        I: IntoIterator<Item = &'a Expenditure>,
    {
        let query = query.trim();
        let query_date = parse_query_date(query)?;

        let matched: Vec<&Expenditure> = expenditures
            .into_iter()
            .filter(|e| record_matches(&query_date, e))
            .collect();

        let total_spending: Money = matched.iter().map(|e| e.amount).sum();
        debug!(query, matched = matched.len(), total = %total_spending, "spending report");

        if total_spending.is_zero() {
            return Err(TrackerError::NoMatchingRecords(query.to_string()));
        }

        let categories = ExpenditureCategory::all()
            .iter()
            .map(|&category| {
                let spent: Money = matched
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum();
                SpendingByCategory {
                    category,
                    total_spending: spent,
                    percentage: round2(spent.cents() as f64 / total_spending.cents() as f64 * 100.0),
                }
            })
            .collect();

        Ok(Self {
            query: query.to_string(),
            total_spending,
            matched_count: matched.len(),
            categories,
        })
    }

    /// Percentage for one category
    pub fn percentage_of(&self, category: ExpenditureCategory) -> f64 {
        self.categories
            .iter()
            .find(|row| row.category == category)
            .map_or(0.0, |row| row.percentage)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total expenditure in {} is {}.\n\n",
            self.query,
            self.total_spending.format_with_symbol(&settings.currency_symbol)
        ));
        output.push_str("BREAKDOWN OF EXPENSES:\n");
        output.push_str(&separator(LINE_WIDTH));
        output.push('\n');

        for row in &self.categories {
            let label = format!("{}:", row.category.name().to_uppercase());
            output.push_str(&format!(
                "{}{} {}\n",
                left_align(&label, LABEL_WIDTH),
                format_bar(row.percentage, settings.bar_step_percent, &settings.bar_glyph),
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&separator(LINE_WIDTH));
        output.push('\n');
        output
    }
}

/// Calculate the breakdown and render it in one step
pub fn calculate_expenditure_per_month<'a, I>(
    query: &str,
    expenditures: I,
    settings: &Settings,
) -> TrackerResult<String>
where
    I: IntoIterator<Item = &'a Expenditure>,
{
    SpendingReport::generate(query, expenditures).map(|report| report.format_terminal(settings))
}

fn record_matches(query: &CalendarDate, expenditure: &Expenditure) -> bool {
    CalendarDate::parse(&expenditure.date).map_or(false, |date| query.contains(&date))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
