//! Error handling for snaplens.
//!
//! The view-composition core has no failure modes of its own. Errors only
//! arise at the edges: reading snapshot files, parsing arguments, installing
//! the log subscriber and driving the terminal.
//!
//! | Category | Description | User can fix |
//! |----------|-------------|--------------|
//! | User | Bad flags, missing or malformed snapshot file | Yes |
//! | System | Filesystem or terminal failures | No |
//! | Configuration | Log filter or log location problems | Yes |

mod category;
mod snaplens_error;

pub use category::ErrorCategory;
pub use snaplens_error::SnaplensError;

/// Result alias used throughout the library.
pub type SnaplensResult<T> = Result<T, SnaplensError>;
