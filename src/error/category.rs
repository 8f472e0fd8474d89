//! Error category classification.
//!
//! Categories drive how the binary reports a failure: whether the user can fix
//! it by changing input, or whether the environment is at fault.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (bad flag, missing or malformed snapshot file).
    User,

    /// System/OS errors (filesystem, terminal, permissions).
    System,

    /// Configuration errors (invalid log filter, unusable log location).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the user can resolve errors in this category by
    /// changing their input and running again.
    pub fn is_user_actionable(&self) -> bool {
        matches!(self, ErrorCategory::User | ErrorCategory::Configuration)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_actionable_categories() {
        assert!(ErrorCategory::User.is_user_actionable());
        assert!(ErrorCategory::Configuration.is_user_actionable());
        assert!(!ErrorCategory::System.is_user_actionable());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorCategory::System.to_string(), "system");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }
}
