//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file only.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::Config;
use crate::error::{SnaplensError, SnaplensResult};

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &Config) -> SnaplensResult<()> {
    let filter = build_filter(&config.log_filter)?;
    let path = config.log_file_path();
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| SnaplensError::Logging {
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), filter = %config.log_filter, "logging initialized");
    Ok(())
}

pub(crate) fn build_filter(directives: &str) -> SnaplensResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| SnaplensError::Logging {
        message: format!("invalid log filter '{}': {}", directives, e),
    })
}

/// Open `path` for appending, creating parent directories as needed.
pub(crate) fn open_log_file(path: &Path) -> SnaplensResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SnaplensError::Logging {
            message: format!("cannot create {}: {}", parent.display(), e),
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SnaplensError::Logging {
            message: format!("cannot open {}: {}", path.display(), e),
        })
}
