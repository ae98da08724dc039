//! Bounded ring buffer for the recent-value log.
//!
//! Key properties:
//!
//! - **Bounded capacity**: never holds more than the configured number of values
//! - **O(1) push**: the oldest value is dropped when the buffer is full
//! - **Newest first**: iteration yields the most recent value first, which is
//!   the order the log panel displays
//!
//! # Example
//!
//! ```rust
//! use colstream::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3);
//! for v in ["a", "b", "c", "d"] {
//!     buffer.push(v);
//! }
//! assert_eq!(buffer.len(), 3);
//! assert_eq!(buffer.newest_first().copied().collect::<Vec<_>>(), ["d", "c", "b"]);
//! ```

use std::collections::VecDeque;

/// A fixed-capacity buffer keeping the most recent values.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Oldest at the front, newest at the back.
    data: VecDeque<T>,
    /// Maximum capacity (never exceeded).
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Ring buffer capacity must be greater than 0");
        Self { data: VecDeque::with_capacity(capacity), capacity }
    }

    /// Pushes a value, discarding the oldest one if the buffer is full.
    pub fn push(&mut self, value: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    /// Returns the most recent value, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.data.back()
    }

    /// Returns the current number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from the most recent value to the oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &T> {
        self.data.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_never_exceeds_capacity() {
        let mut buf = RingBuffer::<u64>::new(100);

        for i in 0..200 {
            buf.push(i);
        }

        assert_eq!(buf.len(), 100, "Buffer should never exceed capacity of 100");
    }

    #[test]
    fn test_latest_returns_most_recent() {
        let mut buf = RingBuffer::new(5);

        buf.push(1);
        assert_eq!(buf.latest(), Some(&1));

        buf.push(2);
        assert_eq!(buf.latest(), Some(&2));
    }

    #[test]
    fn test_newest_first_after_wrap() {
        let mut buf = RingBuffer::new(3);
        for i in 1..=5 {
            buf.push(i);
        }

        let values: Vec<i32> = buf.newest_first().copied().collect();
        assert_eq!(values, vec![5, 4, 3]);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = RingBuffer::<String>::new(10);
        assert!(buf.is_empty());
        assert_eq!(buf.latest(), None);
        assert_eq!(buf.newest_first().count(), 0);
        assert_eq!(buf.capacity(), 10);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = RingBuffer::<u8>::new(0);
    }
}
