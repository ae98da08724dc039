//! The dashboard's single control loop.
//!
//! [`EventScheduler`] owns the aggregator, the rate tracker and the renderer,
//! and is the only code that mutates them. It waits on four sources at once:
//!
//! - ingest events from the stdin task (apply, snapshot, paint)
//! - the forced-redraw timer (re-read dimensions, relayout, repaint)
//! - the 1 s rate-sample timer (close a throughput interval)
//! - terminal events (resize, redraw keys, quit)
//!
//! Because every paint happens on this loop, a frame is never drawn while
//! the aggregator is mid-update.

use crate::aggregator::StreamAggregator;
use crate::config::Config;
use crate::error::Result;
use crate::ingest::IngestEvent;
use crate::input::{Action, InputHandler};
use crate::rate::RateTracker;
use crate::render::Renderer;
use crate::sort::SortPolicy;

use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Throughput sample interval.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on queued lines applied before a single paint.
pub const MAX_BATCH: usize = 1024;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A quit key was pressed.
    Quit,
    /// The terminal event stream ended.
    TerminalClosed,
}

/// Serializes ingestion, timers and terminal events onto one renderer.
#[derive(Debug)]
pub struct EventScheduler<R> {
    aggregator: StreamAggregator,
    rate: RateTracker,
    renderer: R,
    input: InputHandler,
    policy: SortPolicy,
    redraw_every: Duration,
    sample_every: Duration,
    input_open: bool,
}

impl<R: Renderer> EventScheduler<R> {
    /// Creates a scheduler for an initialized aggregator.
    pub fn new(aggregator: StreamAggregator, renderer: R, config: &Config) -> Self {
        Self {
            aggregator,
            rate: RateTracker::new(),
            renderer,
            input: InputHandler::new(),
            policy: config.sort_policy(),
            redraw_every: config.redraw_interval(),
            sample_every: SAMPLE_INTERVAL,
            input_open: true,
        }
    }

    /// Runs until a quit key is pressed or the terminal goes away.
    ///
    /// End of input does not stop the loop; the last frame stays on screen.
    pub async fn run<S>(
        &mut self,
        mut lines: mpsc::Receiver<IngestEvent>,
        mut events: S,
    ) -> Result<ExitReason>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        self.renderer.set_layout(self.aggregator.arity())?;
        self.full_redraw()?;

        let start = Instant::now();
        let mut redraw = time::interval_at(start + self.redraw_every, self.redraw_every);
        redraw.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sample = time::interval_at(start + self.sample_every, self.sample_every);
        sample.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                ingest = lines.recv(), if self.input_open => match ingest {
                    Some(IngestEvent::Line(line)) => {
                        self.apply(&line);
                        self.drain(&mut lines);
                        self.paint()?;
                    }
                    Some(IngestEvent::Closed) | None => self.close_input(),
                },
                _ = redraw.tick() => self.full_redraw()?,
                _ = sample.tick() => {
                    self.rate.tick();
                    self.renderer.paint_throughput(self.rate.series())?;
                    self.renderer.present()?;
                }
                event = events.next() => match event {
                    Some(Ok(event)) => match self.input.handle_event(&event) {
                        Action::Quit => {
                            tracing::info!(records = self.aggregator.records(), "quit requested");
                            return Ok(ExitReason::Quit);
                        }
                        Action::Redraw => self.full_redraw()?,
                        Action::Resize(width, height) => {
                            self.renderer.relayout(width, height)?;
                            self.paint()?;
                        }
                        Action::None => {}
                    },
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::info!("terminal event stream ended");
                        return Ok(ExitReason::TerminalClosed);
                    }
                },
            }
        }
    }

    fn apply(&mut self, line: &str) {
        self.aggregator.apply(line);
        self.rate.record(1);
    }

    /// Applies lines that are already queued so one paint covers the batch.
    fn drain(&mut self, lines: &mut mpsc::Receiver<IngestEvent>) {
        let mut applied = 1;
        while applied < MAX_BATCH {
            match lines.try_recv() {
                Ok(IngestEvent::Line(line)) => {
                    self.apply(&line);
                    applied += 1;
                }
                Ok(IngestEvent::Closed) | Err(TryRecvError::Disconnected) => {
                    self.close_input();
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }
        tracing::trace!(applied, "applied input batch");
    }

    fn close_input(&mut self) {
        if self.input_open {
            tracing::info!(records = self.aggregator.records(), "input closed, keeping last frame");
        }
        self.input_open = false;
    }

    /// Snapshots every column and draws a frame.
    fn paint(&mut self) -> Result<()> {
        for (index, snapshot) in self.aggregator.snapshot_all(self.policy).into_iter().enumerate() {
            self.renderer.paint_column(index, snapshot)?;
        }
        self.renderer.paint_throughput(self.rate.series())?;
        self.renderer.present()
    }

    /// Re-reads the terminal size, relayouts and repaints.
    fn full_redraw(&mut self) -> Result<()> {
        let (width, height) = self.renderer.dimensions()?;
        tracing::debug!(width, height, "forced redraw");
        self.renderer.relayout(width, height)?;
        self.paint()
    }

    /// The aggregator state.
    pub fn aggregator(&self) -> &StreamAggregator {
        &self.aggregator
    }

    /// The throughput tracker.
    pub fn rate(&self) -> &RateTracker {
        &self.rate
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Whether the ingestion side is still delivering lines.
    pub fn input_open(&self) -> bool {
        self.input_open
    }

    /// Returns the renderer, consuming the scheduler.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
