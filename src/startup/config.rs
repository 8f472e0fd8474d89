//! Startup configuration.

use std::path::PathBuf;

use crate::cli::RunArgs;

/// Filter used when `SNAPLENS_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "snaplens=info";
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

pub const ENV_LOG: &str = "SNAPLENS_LOG";
pub const ENV_SNAPSHOTS: &str = "SNAPLENS_SNAPSHOTS";

/// Configuration for a snaplens session.
///
/// Use the builder methods to customize it:
///
/// ```ignore
/// use snaplens::startup::Config;
///
/// let config = Config::from_env()
///     .with_snapshot_path("snaps.jsonl")
///     .with_tick_rate_ms(100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Snapshot file to open (JSON array or JSON lines)
    pub snapshot_path: Option<PathBuf>,
    /// Log file override; see [`Config::log_file_path`]
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive string
    pub log_filter: String,
    /// Idle redraw interval of the event loop
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Create config from `SNAPLENS_LOG` and `SNAPLENS_SNAPSHOTS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = lookup(ENV_SNAPSHOTS).filter(|v| !v.trim().is_empty()) {
            config = config.with_snapshot_path(path);
        }
        config
    }

    /// Apply command-line options; they win over the environment.
    pub fn with_run_args(mut self, args: RunArgs) -> Self {
        if let Some(path) = args.snapshot_path {
            self.snapshot_path = Some(path);
        }
        if let Some(path) = args.log_file {
            self.log_file = Some(path);
        }
        self
    }

    /// Where logs go: the override, else `<data_local_dir>/snaplens/snaplens.log`.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("snaplens")
                .join("snaplens.log")
        })
    }
}
