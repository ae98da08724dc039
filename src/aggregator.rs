//! Streaming aggregation of delimited records into per-column state.
//!
//! The first record fixes the number of columns for the whole session.
//! Later records are applied field by field up to that arity: shorter
//! records leave the remaining columns untouched and extra fields are
//! dropped.

use crate::column::{Column, ColumnSnapshot, RECENT_CAPACITY};
use crate::error::{Error, Result};
use crate::sort::SortPolicy;

/// Owns the columns of a delimited stream and applies records to them.
#[derive(Debug, Clone)]
pub struct StreamAggregator {
    columns: Vec<Column>,
    delimiter: String,
    ignore_empty: bool,
    records: u64,
}

impl StreamAggregator {
    /// Infers the column layout from the first record.
    ///
    /// The first record only shapes the aggregator; it is not counted.
    pub fn initialize(first_line: &str, delimiter: &str, ignore_empty: bool) -> Result<Self> {
        Self::with_recent_capacity(first_line, delimiter, ignore_empty, RECENT_CAPACITY)
    }

    /// Like [`StreamAggregator::initialize`] with a custom recent-value log size.
    pub fn with_recent_capacity(
        first_line: &str,
        delimiter: &str,
        ignore_empty: bool,
        recent_capacity: usize,
    ) -> Result<Self> {
        if first_line.is_empty() {
            return Err(Error::EmptyFirstLine);
        }
        if delimiter.is_empty() {
            return Err(Error::ConfigInvalid {
                key: "delimiter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if recent_capacity == 0 {
            return Err(Error::ConfigInvalid {
                key: "recent_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let arity = first_line.split(delimiter).count();
        let columns = (0..arity).map(|_| Column::with_capacity(recent_capacity)).collect();
        tracing::info!(arity, "column layout fixed from first record");

        Ok(Self { columns, delimiter: delimiter.to_string(), ignore_empty, records: 0 })
    }

    /// Applies one record. Returns the number of fields that were counted.
    pub fn apply(&mut self, line: &str) -> usize {
        self.records += 1;
        let ignore_empty = self.ignore_empty;
        self.columns
            .iter_mut()
            .zip(line.split(self.delimiter.as_str()))
            .map(|(column, field)| column.observe(field, ignore_empty))
            .filter(|counted| *counted)
            .count()
    }

    /// Snapshots every column, indexed by column position.
    #[must_use]
    pub fn snapshot_all(&self, policy: SortPolicy) -> Vec<ColumnSnapshot> {
        self.columns.iter().map(|c| c.snapshot(policy)).collect()
    }

    /// Number of columns fixed by the first record.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Column at `index`, if within the arity.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Number of records applied since initialization.
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    /// The field delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}
