//! # colstream
//!
//! Live terminal dashboard for delimited text streams.
//!
//! Pipe tabular text into the `colstream` binary and it shows, for every
//! column, a running frequency bar chart, each value's share of the total
//! and a log of the most recent values, plus a lines-per-second plot.
//!
//! ## Architecture
//!
//! - **aggregator** / **column**: per-column frequency tables built from the stream
//! - **sort**: numeric or lexical label ordering
//! - **rate**: records-per-second series
//! - **ingest**: the stdin reader task
//! - **scheduler**: the single event loop that owns all state and the renderer
//! - **render**: the renderer trait and its ratatui implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use colstream::{SortPolicy, StreamAggregator};
//!
//! let mut agg = StreamAggregator::initialize("method,status", ",", true)?;
//! agg.apply("GET,200");
//! agg.apply("POST,500");
//! agg.apply("GET,200");
//!
//! let snaps = agg.snapshot_all(SortPolicy::Numeric);
//! assert_eq!(snaps[0].labels, ["GET", "POST"]);
//! assert_eq!(snaps[0].values, [2, 1]);
//! # Ok::<(), colstream::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod aggregator;
pub mod column;
pub mod config;
pub mod error;
pub mod ingest;
pub mod input;
pub mod logging;
pub mod rate;
pub mod render;
pub mod ring_buffer;
pub mod scheduler;
pub mod sort;

pub use aggregator::StreamAggregator;
pub use column::{Column, ColumnSnapshot};
pub use config::{Config, Overrides};
pub use error::{Error, Result};
pub use ingest::{IngestEvent, LineReader};
pub use rate::RateTracker;
pub use render::{Renderer, TerminalRenderer};
pub use ring_buffer::RingBuffer;
pub use scheduler::{EventScheduler, ExitReason};
pub use sort::SortPolicy;

/// Commonly used types for embedding the dashboard.
pub mod prelude {
    pub use crate::aggregator::StreamAggregator;
    pub use crate::column::ColumnSnapshot;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::render::Renderer;
    pub use crate::scheduler::EventScheduler;
    pub use crate::sort::SortPolicy;
}
