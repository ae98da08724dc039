//! File logging.
//!
//! The terminal is owned by the dashboard, so log output goes to
//! `<cache_dir>/colstream/colstream.log`. The filter is read from
//! `COLSTREAM_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "COLSTREAM_LOG";

const LOG_FILE: &str = "colstream.log";

/// Default log directory, `<cache_dir>/colstream`.
#[must_use]
pub fn default_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("colstream"))
}

/// Installs the global subscriber writing to `dir`.
///
/// Returns the writer guard, which must stay alive for buffered lines to be
/// flushed. Returns `None` (and logs nothing) if the directory cannot be
/// created or a subscriber is already installed.
pub fn init(dir: &Path) -> Option<WorkerGuard> {
    std::fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested");

        let guard = init(&log_dir);
        // Only one global subscriber per process; another test may own it.
        if let Some(guard) = guard {
            tracing::info!("hello from test");
            drop(guard);
            let content = std::fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
            assert!(content.contains("hello from test"));
        }
        assert!(log_dir.is_dir());
    }
}
