//! Record service
//!
//! Provides the add / update / delete operations shared by all three record
//! lists. Callers hand in fully validated records, so a failure here never
//! leaves a list half-modified.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::{Record, RecordList};

/// Service for mutating one record list
pub struct RecordService<'a, T: Record> {
    list: &'a mut RecordList<T>,
}

impl<'a, T: Record> RecordService<'a, T> {
    /// Create a new record service over `list`
    pub fn new(list: &'a mut RecordList<T>) -> Self {
        Self { list }
    }

    /// Append a record, returning its display index
    pub fn add(&mut self, record: T) -> usize {
        self.list.push(record);
        let index = self.list.len();
        info!(kind = T::KIND, index, "record added");
        index
    }

    /// Look up a record by raw display index
    pub fn get(&self, raw_index: &str) -> TrackerResult<&T> {
        let position = self.list.resolve_index(raw_index)?;
        self.list
            .get(position)
            .ok_or_else(|| TrackerError::index_out_of_range(T::KIND, raw_index.trim()))
    }

    /// Replace the record at a display index with `replacement`
    ///
    /// Fails with `NoChange` when the replacement equals the existing record
    /// field for field. Returns the record that was replaced.
    pub fn update(&mut self, raw_index: &str, replacement: T) -> TrackerResult<T> {
        let position = self.list.resolve_index(raw_index)?;

        if self.list.get(position) == Some(&replacement) {
            return Err(TrackerError::NoChange(T::KIND));
        }

        let previous = self.list.replace(position, replacement)?;
        info!(kind = T::KIND, index = position + 1, "record updated");
        Ok(previous)
    }

    /// Remove the record at a display index
    pub fn delete(&mut self, raw_index: &str) -> TrackerResult<T> {
        let position = self.list.resolve_index(raw_index)?;
        let removed = self.list.remove(position)?;
        info!(kind = T::KIND, index = position + 1, remaining = self.list.len(), "record deleted");
        Ok(removed)
    }
}
