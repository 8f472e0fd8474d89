//! Command-line argument parsing for snaplens.

use std::path::PathBuf;

use crate::error::{SnaplensError, SnaplensResult};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunArgs),
}

/// Options for the TUI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    pub snapshot_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

pub const USAGE: &str = "\
Usage: snaplens [OPTIONS] [SNAPSHOT_FILE]

Browse captured state snapshots in the terminal.

Arguments:
  [SNAPSHOT_FILE]    JSON array or JSON lines of snapshots

Options:
      --log-file PATH  Write logs to PATH
  -h, --help           Print help
  -V, --version        Print version";

/// Parse command-line arguments and return the command to execute.
///
/// ```
/// use snaplens::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["snaplens".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> SnaplensResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut run = RunArgs::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--log-file" => {
                let path = args
                    .next()
                    .ok_or_else(|| SnaplensError::usage("--log-file needs a path"))?;
                run.log_file = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(SnaplensError::usage(format!(
                    "Unknown option '{}'. Run snaplens --help for usage.",
                    flag
                )));
            }
            path => {
                if run.snapshot_path.is_some() {
                    return Err(SnaplensError::usage("Only one snapshot file can be given"));
                }
                run.snapshot_path = Some(PathBuf::from(path));
            }
        }
    }
    Ok(CliCommand::Run(run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SnaplensResult<CliCommand> {
        let mut all = vec!["snaplens".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(RunArgs::default()));
    }

    #[test]
    fn test_parse_file_and_log() {
        assert_eq!(
            parse(&["--log-file", "/tmp/s.log", "snaps.jsonl"]).unwrap(),
            CliCommand::Run(RunArgs {
                snapshot_path: Some("snaps.jsonl".into()),
                log_file: Some("/tmp/s.log".into()),
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        let err = parse(&["--unknown"]).unwrap_err();
        assert!(err.user_message().contains("--unknown"));
    }

    #[test]
    fn test_parse_missing_log_path() {
        assert!(matches!(
            parse(&["--log-file"]),
            Err(SnaplensError::Usage { .. })
        ));
    }

    #[test]
    fn test_parse_two_files() {
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
