//! Standard input ingestion.
//!
//! Lines are read on their own task and handed to the scheduler over a
//! bounded channel, so a slow terminal never stalls reading and a quiet
//! input never stalls the terminal. The ingestion task never touches the
//! aggregator or the renderer.

use crate::error::{Error, Result};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Queue depth between the reader task and the scheduler.
pub const CHANNEL_CAPACITY: usize = 4096;

/// Message from the ingestion task to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestEvent {
    /// One raw record, without its line terminator.
    Line(String),
    /// Input reached end of stream or failed; no more lines will follow.
    Closed,
}

/// Reads newline-terminated records from an async buffered reader.
///
/// Invalid UTF-8 is replaced rather than rejected, and a trailing `\r` is
/// stripped so CRLF input splits the same as LF input.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::with_capacity(256) }
    }

    /// Reads the next record, or `None` at end of stream.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Reads the record that fixes the column layout.
    ///
    /// # Errors
    ///
    /// [`Error::NoInput`] if the stream ends first, [`Error::EmptyFirstLine`]
    /// if the first record is blank.
    pub async fn first_line(&mut self) -> Result<String> {
        match self.next_line().await? {
            None => Err(Error::NoInput),
            Some(line) if line.is_empty() => Err(Error::EmptyFirstLine),
            Some(line) => Ok(line),
        }
    }
}

impl<R> LineReader<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    /// Spawns the producer task feeding `tx` until end of input.
    ///
    /// The task ends early if the scheduler drops its receiver.
    pub fn spawn(mut self, tx: mpsc::Sender<IngestEvent>) -> JoinHandle<u64> {
        tokio::spawn(async move {
            let mut lines = 0u64;
            loop {
                match self.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(IngestEvent::Line(line)).await.is_err() {
                            tracing::debug!(lines, "scheduler gone, stopping ingestion");
                            return lines;
                        }
                        lines += 1;
                    }
                    Ok(None) => {
                        tracing::info!(lines, "end of input");
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, lines, "input read failed, stopping ingestion");
                        break;
                    }
                }
            }
            // The scheduler may already be gone; nothing to do then.
            let _ = tx.send(IngestEvent::Closed).await;
            lines
        })
    }
}

/// Creates the channel used between [`LineReader::spawn`] and the scheduler.
#[must_use]
pub fn channel() -> (mpsc::Sender<IngestEvent>, mpsc::Receiver<IngestEvent>) {
    mpsc::channel(CHANNEL_CAPACITY)
}
