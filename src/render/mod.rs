//! Rendering collaborator for the scheduler.
//!
//! The scheduler only talks to a [`Renderer`]; it never touches the
//! terminal directly. [`TerminalRenderer`] is the ratatui implementation
//! used by the binary.

pub mod layout;
pub mod terminal;

pub use layout::DashboardLayout;
pub use terminal::TerminalRenderer;

use crate::column::ColumnSnapshot;
use crate::error::Result;

/// Sink for render-ready data.
///
/// `paint_*` calls stage data; nothing reaches the screen until
/// [`Renderer::present`].
pub trait Renderer {
    /// Sets up one panel row per column.
    fn set_layout(&mut self, columns: usize) -> Result<()>;

    /// Re-fits the layout to a terminal of the given size and clears it.
    fn relayout(&mut self, width: u16, height: u16) -> Result<()>;

    /// Current terminal size as `(width, height)`.
    fn dimensions(&self) -> Result<(u16, u16)>;

    /// Stages the bar chart, share panel and recent log of one column.
    fn paint_column(&mut self, index: usize, snapshot: ColumnSnapshot) -> Result<()>;

    /// Stages the throughput plot.
    fn paint_throughput(&mut self, series: &[u64]) -> Result<()>;

    /// Draws the staged frame.
    fn present(&mut self) -> Result<()>;
}
