//! snaplens - a terminal viewer for captured application state snapshots.
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod app;
pub mod cli;
pub mod error;
pub mod host;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod timeline;
pub mod ui;
