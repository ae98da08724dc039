//! Records-per-interval throughput tracking.

/// Counts records per fixed sample interval and keeps the per-interval series.
///
/// The series is append-only for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct RateTracker {
    current: u64,
    series: Vec<u64>,
}

impl RateTracker {
    /// Creates a tracker with an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` records to the current interval.
    pub fn record(&mut self, n: u64) {
        self.current += n;
    }

    /// Closes the current interval: appends its count and starts a new one at 0.
    pub fn tick(&mut self) {
        self.series.push(self.current);
        self.current = 0;
    }

    /// Records counted in the interval still open.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Per-interval counts, oldest first.
    #[must_use]
    pub fn series(&self) -> &[u64] {
        &self.series
    }

    /// The most recent closed interval, if any.
    #[must_use]
    pub fn latest(&self) -> Option<u64> {
        self.series.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_appends_interval_count() {
        let mut rate = RateTracker::new();
        rate.record(1);
        rate.record(1);
        rate.record(1);
        rate.tick();

        assert_eq!(rate.series(), &[3]);
        assert_eq!(rate.current(), 0);

        rate.record(1);
        assert_eq!(rate.current(), 1);
        rate.tick();
        assert_eq!(rate.series(), &[3, 1]);
        assert_eq!(rate.latest(), Some(1));
    }

    #[test]
    fn test_idle_intervals_record_zero() {
        let mut rate = RateTracker::new();
        rate.tick();
        rate.tick();
        assert_eq!(rate.series(), &[0, 0]);
    }

    #[test]
    fn test_record_batch() {
        let mut rate = RateTracker::new();
        rate.record(250);
        rate.tick();
        assert_eq!(rate.latest(), Some(250));
        assert!(RateTracker::new().latest().is_none());
    }
}
