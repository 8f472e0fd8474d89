//! Startup: configuration and logging, set up before the terminal is.
//!
//! - [`config`] - Session configuration from env and CLI
//! - [`logging`] - Tracing subscriber writing to a log file
//!
//! ```ignore
//! use snaplens::startup::{init_logging, Config};
//!
//! let config = Config::from_env().with_run_args(run_args);
//! init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::init_logging;
