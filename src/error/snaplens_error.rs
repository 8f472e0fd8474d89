//! Unified error type for snaplens.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

/// Errors raised at the outer surfaces of the viewer: argument parsing,
/// snapshot file loading, logging setup and terminal control.
///
/// The view host itself never fails; absent snapshots are rendered as
/// placeholders rather than reported here.
#[derive(Debug, Error)]
pub enum SnaplensError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The snapshot file was read but is not valid snapshot JSON.
    #[error("failed to parse snapshot file {path} (line {line}): {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid command-line usage.
    #[error("{message}")]
    Usage { message: String },

    /// The log subscriber could not be installed.
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },

    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl SnaplensError {
    /// Build a usage error from any displayable message.
    pub fn usage(message: impl Into<String>) -> Self {
        SnaplensError::Usage {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SnaplensError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorCategory::User
            }
            SnaplensError::Io { .. } | SnaplensError::Terminal(_) => ErrorCategory::System,
            SnaplensError::Parse { .. } | SnaplensError::Usage { .. } => ErrorCategory::User,
            SnaplensError::Logging { .. } => ErrorCategory::Configuration,
        }
    }

    /// Get a short message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            SnaplensError::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                format!("Snapshot file not found: {}", path.display())
            }
            SnaplensError::Io { path, .. } => {
                format!("Could not read {}. Check file permissions.", path.display())
            }
            SnaplensError::Parse { path, line, .. } => {
                format!("{} is not valid snapshot JSON (line {}).", path.display(), line)
            }
            SnaplensError::Usage { message } => message.clone(),
            SnaplensError::Logging { .. } => {
                "Logging could not be set up. Check SNAPLENS_LOG and --log-file.".to_string()
            }
            SnaplensError::Terminal(_) => {
                "Terminal error. You may need to reset your terminal.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_user_error() {
        let err = SnaplensError::Io {
            path: PathBuf::from("/nope/snapshots.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(err.user_message().contains("/nope/snapshots.json"));
    }

    #[test]
    fn test_permission_denied_is_system_error() {
        let err = SnaplensError::Io {
            path: PathBuf::from("snapshots.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_parse_error_mentions_line() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SnaplensError::Parse {
            path: PathBuf::from("snaps.jsonl"),
            line: 3,
            source,
        };
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(err.user_message().contains("line 3"));
        assert!(err.to_string().contains("snaps.jsonl"));
    }

    #[test]
    fn test_usage_message_passes_through() {
        let err = SnaplensError::usage("unknown flag: --bogus");
        assert_eq!(err.user_message(), "unknown flag: --bogus");
        assert_eq!(err.to_string(), "unknown flag: --bogus");
    }

    #[test]
    fn test_terminal_from_io() {
        let err: SnaplensError = io::Error::other("tty gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
