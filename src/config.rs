//! Configuration for the dashboard.
//!
//! Supports YAML configuration with precedence: CLI > ENV > file > defaults.
//! The CLI and environment layers are resolved by the binary and applied on
//! top of the file through [`Overrides`].

use crate::error::{Error, Result};
use crate::sort::SortPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest accepted forced redraw interval, in seconds (one day).
pub const MAX_REDRAW_EVERY: u64 = 86_400;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Field separator.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Skip blank fields instead of counting them.
    #[serde(default = "default_true")]
    pub ignore_empty: bool,

    /// Order labels numerically where they parse as integers.
    #[serde(default = "default_true")]
    pub numeric_sort: bool,

    /// Forced full redraw interval in seconds.
    #[serde(default = "default_redraw_every")]
    pub redraw_every: u64,

    /// Number of recent values kept per column.
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
}

fn default_delimiter() -> String {
    "\t".to_string()
}
fn default_true() -> bool {
    true
}
fn default_redraw_every() -> u64 {
    5
}
fn default_recent_capacity() -> usize {
    crate::column::RECENT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            ignore_empty: default_true(),
            numeric_sort: default_true(),
            redraw_every: default_redraw_every(),
            recent_capacity: default_recent_capacity(),
        }
    }
}

/// Values from the CLI or environment that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Field separator.
    pub delimiter: Option<String>,
    /// Skip blank fields.
    pub ignore_empty: Option<bool>,
    /// Numeric label ordering.
    pub numeric_sort: Option<bool>,
    /// Forced redraw interval in seconds.
    pub redraw_every: Option<u64>,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads the file at `path` if it exists, otherwise the defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_if_present(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default config file location, `<config_dir>/colstream/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colstream").join("config.yaml"))
    }

    /// Applies higher-precedence values on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(delimiter) = overrides.delimiter {
            self.delimiter = delimiter;
        }
        if let Some(ignore_empty) = overrides.ignore_empty {
            self.ignore_empty = ignore_empty;
        }
        if let Some(numeric_sort) = overrides.numeric_sort {
            self.numeric_sort = numeric_sort;
        }
        if let Some(redraw_every) = overrides.redraw_every {
            self.redraw_every = redraw_every;
        }
        self
    }

    /// Checks values that would make the dashboard unusable.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(invalid("delimiter", "must not be empty"));
        }
        if self.redraw_every == 0 {
            return Err(invalid("redraw_every", "must be at least 1 second"));
        }
        if self.redraw_every > MAX_REDRAW_EVERY {
            return Err(invalid("redraw_every", "must be at most 86400 seconds"));
        }
        if self.recent_capacity == 0 {
            return Err(invalid("recent_capacity", "must be greater than 0"));
        }
        Ok(())
    }

    /// Returns the forced redraw interval as a Duration, held within
    /// `1..=MAX_REDRAW_EVERY` seconds even for an unvalidated config.
    #[must_use]
    pub fn redraw_interval(&self) -> Duration {
        Duration::from_secs(self.redraw_every.clamp(1, MAX_REDRAW_EVERY))
    }

    /// Label ordering selected by `numeric_sort`.
    #[must_use]
    pub fn sort_policy(&self) -> SortPolicy {
        SortPolicy::from_numeric_flag(self.numeric_sort)
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid { key: key.to_string(), message: message.to_string() }
}
