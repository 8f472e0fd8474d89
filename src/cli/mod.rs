//! CLI module for snaplens.
//!
//! Called early in main() so `--version` and `--help` are answered before the
//! terminal is touched:
//!
//! ```ignore
//! use snaplens::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(run) = run_cli_command(command) else { return Ok(()) };
//! // continue to TUI with `run`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunArgs, USAGE};
pub use version::{handle_version_command, version_line, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the TUI options for `Run`, or `None` when the command was fully
/// handled here.
pub fn run_cli_command(command: CliCommand) -> Option<RunArgs> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            None
        }
        CliCommand::Run(args) => Some(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_args() {
        let args = RunArgs {
            snapshot_path: Some("s.json".into()),
            log_file: None,
        };
        assert_eq!(run_cli_command(CliCommand::Run(args.clone())), Some(args));
    }
}
