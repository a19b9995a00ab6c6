//! Insertion-ordered record lists
//!
//! Records are addressed by display index: the 1-based position shown to the
//! user. A display index is only meaningful until the next deletion, which
//! shifts every later record down by one.

use std::slice;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CreditCard, Expenditure, Income};

/// Offset between user-facing display indexes and vector positions
pub const LIST_INDEX_CORRECTION: usize = 1;

/// A record kind that can live in a `RecordList`
pub trait Record: Clone + PartialEq {
    /// Human-readable kind used in messages ("Expenditure", "Credit card", ...)
    const KIND: &'static str;
}

impl Record for Expenditure {
    const KIND: &'static str = "Expenditure";
}

impl Record for CreditCard {
    const KIND: &'static str = "Credit card";
}

impl Record for Income {
    const KIND: &'static str = "Income";
}

/// Ordered, mutable container of records with no duplicate elimination
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    items: Vec<T>,
}

pub type ExpenditureList = RecordList<Expenditure>;
pub type CreditCardList = RecordList<CreditCard>;
pub type IncomeList = RecordList<Income>;

impl<T: Record> RecordList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Get a record by internal (0-based) position
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Append a record at the end
    pub fn push(&mut self, record: T) {
        self.items.push(record);
    }

    /// Convert a raw 1-based display index into an internal position
    pub fn resolve_index(&self, raw: &str) -> TrackerResult<usize> {
        let raw = raw.trim();
        raw.parse::<usize>()
            .ok()
            .and_then(|display| display.checked_sub(LIST_INDEX_CORRECTION))
            .filter(|position| *position < self.items.len())
            .ok_or_else(|| TrackerError::index_out_of_range(T::KIND, raw))
    }

    /// Replace the record at `position`, returning the previous one
    pub fn replace(&mut self, position: usize, record: T) -> TrackerResult<T> {
        let slot = self
            .items
            .get_mut(position)
            .ok_or_else(|| TrackerError::index_out_of_range(T::KIND, display(position)))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove the record at `position`, shifting later records down
    pub fn remove(&mut self, position: usize) -> TrackerResult<T> {
        if position >= self.items.len() {
            return Err(TrackerError::index_out_of_range(T::KIND, display(position)));
        }
        Ok(self.items.remove(position))
    }
}

impl CreditCardList {
    /// Find a card by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&CreditCard> {
        self.items.iter().find(|card| card.matches_name(name))
    }
}

impl<T: Record> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> FromIterator<T> for RecordList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Record> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn display(position: usize) -> String {
    (position + LIST_INDEX_CORRECTION).to_string()
}
