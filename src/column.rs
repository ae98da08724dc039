//! Per-field aggregation state.

use crate::ring_buffer::RingBuffer;
use crate::sort::SortPolicy;
use std::collections::HashMap;

/// Number of raw values kept in a column's recent-value log.
pub const RECENT_CAPACITY: usize = 100;

/// Render-ready view of one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSnapshot {
    /// Distinct labels in display order.
    pub labels: Vec<String>,
    /// Occurrence count per label, parallel to `labels`.
    pub values: Vec<u64>,
    /// Recent values joined with newlines, most recent first.
    pub recent_text: String,
}

impl ColumnSnapshot {
    /// Total of all counts in the snapshot.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    /// Iterates over `(label, count)` pairs in display order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

/// Frequency table and recent-value log for one field position.
///
/// Labels are never evicted; only the recent-value log is bounded.
#[derive(Debug, Clone)]
pub struct Column {
    counts: HashMap<String, u64>,
    recent: RingBuffer<String>,
    total: u64,
}

impl Column {
    /// Creates an empty column with the default log capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(RECENT_CAPACITY)
    }

    /// Creates an empty column keeping `recent_capacity` raw values.
    #[must_use]
    pub fn with_capacity(recent_capacity: usize) -> Self {
        Self { counts: HashMap::new(), recent: RingBuffer::new(recent_capacity), total: 0 }
    }

    /// Counts one value. A blank value is skipped when `ignore_empty` is set.
    ///
    /// Returns whether the value was counted.
    pub fn observe(&mut self, value: &str, ignore_empty: bool) -> bool {
        if value.is_empty() && ignore_empty {
            return false;
        }

        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
        self.recent.push(value.to_string());
        self.total += 1;
        true
    }

    /// Builds a fresh ordered snapshot of the current counts.
    #[must_use]
    pub fn snapshot(&self, policy: SortPolicy) -> ColumnSnapshot {
        let ordered = policy.order(self.counts.keys().map(String::as_str));
        let values = ordered.iter().map(|label| self.counts[*label]).collect();

        ColumnSnapshot {
            labels: ordered.into_iter().map(str::to_string).collect(),
            values,
            recent_text: self.recent_text(),
        }
    }

    /// The recent-value log joined with newlines, most recent first.
    #[must_use]
    pub fn recent_text(&self) -> String {
        let mut text = String::new();
        for (i, value) in self.recent.newest_first().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(value);
        }
        text
    }

    /// Recent values, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.newest_first().map(String::as_str)
    }

    /// Count for one label (0 if never seen).
    #[must_use]
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of values counted so far.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_counts_and_logs() {
        let mut column = Column::new();

        assert!(column.observe("a", true));
        assert!(column.observe("b", true));
        assert!(column.observe("a", true));

        assert_eq!(column.count("a"), 2);
        assert_eq!(column.count("b"), 1);
        assert_eq!(column.count("zzz"), 0);
        assert_eq!(column.total(), 3);
        assert_eq!(column.distinct(), 2);
        assert_eq!(column.recent_text(), "a\nb\na");
    }

    #[test]
    fn test_empty_value_skipped_when_ignored() {
        let mut column = Column::new();

        assert!(!column.observe("", true));
        assert_eq!(column.total(), 0);
        assert_eq!(column.distinct(), 0);
        assert_eq!(column.recent_text(), "");
    }

    #[test]
    fn test_empty_value_counted_when_not_ignored() {
        let mut column = Column::new();

        assert!(column.observe("", false));
        assert_eq!(column.count(""), 1);
        assert_eq!(column.recent().count(), 1);
    }

    #[test]
    fn test_recent_log_bounded_newest_first() {
        let mut column = Column::new();
        for i in 0..250 {
            column.observe(&i.to_string(), true);
        }

        let recent: Vec<&str> = column.recent().collect();
        assert_eq!(recent.len(), RECENT_CAPACITY);
        assert_eq!(recent[0], "249");
        assert_eq!(recent[RECENT_CAPACITY - 1], "150");
        assert_eq!(column.total(), 250);
    }

    #[test]
    fn test_snapshot_numeric_order() {
        let mut column = Column::new();
        for v in ["10", "2", "9", "x", "2"] {
            column.observe(v, true);
        }

        let snap = column.snapshot(SortPolicy::Numeric);
        assert_eq!(snap.labels, vec!["2", "9", "10", "x"]);
        assert_eq!(snap.values, vec![2, 1, 1, 1]);
        assert_eq!(snap.total(), 5);
        assert_eq!(snap.recent_text, "2\nx\n9\n2\n10");
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut column = Column::new();
        for v in ["b", "a", "c", "a"] {
            column.observe(v, true);
        }

        let first = column.snapshot(SortPolicy::Lexical);
        let second = column.snapshot(SortPolicy::Lexical);
        assert_eq!(first, second);
        assert_eq!(first.pairs().collect::<Vec<_>>(), vec![("a", 2), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn test_custom_capacity() {
        let mut column = Column::with_capacity(2);
        for v in ["a", "b", "c"] {
            column.observe(v, true);
        }
        assert_eq!(column.recent_text(), "c\nb");
    }
}
