//! Reading snapshot history from disk.
//!
//! Two layouts are accepted: a single JSON array of snapshots, or JSON lines
//! with one snapshot per line (blank lines are skipped). The second form is what
//! a capturing process appends to while it runs.

use std::fs;
use std::path::Path;

use super::snapshot::Snapshot;
use crate::error::{SnaplensError, SnaplensResult};

/// Load the full snapshot history from `path`.
pub fn load_history(path: &Path) -> SnaplensResult<Vec<Snapshot>> {
    let text = fs::read_to_string(path).map_err(|source| SnaplensError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let history = parse_history(&text, path)?;
    tracing::info!(path = %path.display(), snapshots = history.len(), "loaded snapshot history");
    Ok(history)
}

/// Parse snapshot history text. `path` is used for error reporting only.
pub fn parse_history(text: &str, path: &Path) -> SnaplensResult<Vec<Snapshot>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|source| SnaplensError::Parse {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        });
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| SnaplensError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}
