//! colstream - live per-column frequency dashboard for delimited text.
//!
//! Usage: `tail -f access.log | cut -f 3,5 | colstream`
//!
//! Keys: space or `r` redraws the screen, any other key quits.

use anyhow::{Context, Result};
use clap::Parser;
use colstream::ingest::{self, LineReader};
use colstream::render::terminal::stdin_is_terminal;
use colstream::{logging, Config, EventScheduler, Overrides, StreamAggregator, TerminalRenderer};
use crossterm::event::EventStream;
use std::path::PathBuf;
use tokio::io::BufReader;

/// Live terminal dashboard of per-column value frequencies.
#[derive(Parser, Debug)]
#[command(name = "colstream")]
#[command(version)]
#[command(about = "Live per-column frequency dashboard for delimited text on stdin", long_about = None)]
struct Cli {
    /// Field delimiter
    #[arg(short, long, env = "COLSTREAM_DELIMITER")]
    delimiter: Option<String>,

    /// Do not count or log blank fields
    #[arg(long, env = "COLSTREAM_IGNORE_EMPTY", value_name = "BOOL")]
    ignore_empty: Option<bool>,

    /// Sort bar chart labels numerically where they parse as integers
    #[arg(long, env = "COLSTREAM_NUMERIC_SORT", value_name = "BOOL")]
    numeric_sort: Option<bool>,

    /// Redraw the screen cleanly every N seconds
    #[arg(long, env = "COLSTREAM_REDRAW_EVERY", value_name = "SECONDS")]
    redraw_every: Option<u64>,

    /// Config file path
    #[arg(short, long, env = "COLSTREAM_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            delimiter: self.delimiter.clone(),
            ignore_empty: self.ignore_empty,
            numeric_sort: self.numeric_sort,
            redraw_every: self.redraw_every,
        }
    }

    fn load_config(&self) -> Result<Config> {
        let file = match &self.config {
            Some(path) => Config::load(path)?,
            None => match Config::default_path() {
                Some(path) => Config::load_if_present(path)?,
                None => Config::default(),
            },
        };
        let config = file.with_overrides(self.overrides());
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Nothing piped in: nothing to show.
    if stdin_is_terminal() {
        return Ok(());
    }

    let config = cli.load_config().context("loading configuration")?;
    let _log_guard = logging::default_dir().and_then(|dir| logging::init(&dir));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let result = runtime.block_on(run(config));
    // A pending stdin read cannot be cancelled; do not wait for it.
    runtime.shutdown_background();
    result
}

async fn run(config: Config) -> Result<()> {
    let mut reader = LineReader::new(BufReader::new(tokio::io::stdin()));
    let first = reader.first_line().await.context("reading first record")?;
    let aggregator = StreamAggregator::with_recent_capacity(
        &first,
        &config.delimiter,
        config.ignore_empty,
        config.recent_capacity,
    )?;
    tracing::info!(?config, arity = aggregator.arity(), "starting dashboard");

    let (tx, rx) = ingest::channel();
    let ingest_task = reader.spawn(tx);

    let renderer = TerminalRenderer::enter().context("initializing terminal")?;
    let mut scheduler = EventScheduler::new(aggregator, renderer, &config);
    let result = scheduler.run(rx, EventStream::new()).await;

    // Restore the terminal before reporting any error.
    scheduler.into_renderer().restore().context("restoring terminal")?;
    ingest_task.abort();

    let reason = result?;
    tracing::info!(?reason, "dashboard stopped");
    Ok(())
}
