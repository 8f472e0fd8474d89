//! Application state for the TUI.
//!
//! [`App`] owns the snapshot timeline and the node selection, and hosts the
//! views through a [`ViewHost`]. Input handling lives in `handlers`.

mod handlers;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::SnaplensResult;
use crate::host::{HostInput, SetState, ViewHost};
use crate::models::{load_history, node_names, SelectedEntry, Snapshot};
use crate::startup::Config;
use crate::timeline::Timeline;
use crate::ui::FrameLayout;

/// One-line message shown in the status bar until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

pub struct App {
    pub timeline: Timeline,
    /// Node names shown by the views. Starts with every name in the history.
    pub selected: Vec<SelectedEntry>,
    pub host: ViewHost,
    /// File the history was read from; `r` re-reads it.
    pub snapshot_path: Option<PathBuf>,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    /// Dirty flag: set on state changes, cleared after each draw.
    pub needs_redraw: bool,
    /// Areas of the last drawn frame, for mapping mouse events.
    pub last_layout: FrameLayout,
}

impl App {
    pub fn new(history: Vec<Snapshot>, snapshot_path: Option<PathBuf>) -> Self {
        let selected = node_names(&history)
            .into_iter()
            .map(SelectedEntry::new)
            .collect();
        Self {
            timeline: Timeline::new(history),
            selected,
            host: ViewHost::new(),
            snapshot_path,
            status: None,
            should_quit: false,
            needs_redraw: true,
            last_layout: FrameLayout::default(),
        }
    }

    /// Load the configured snapshot file, or start empty when there is none.
    pub fn from_config(config: &Config) -> SnaplensResult<Self> {
        let history = match &config.snapshot_path {
            Some(path) => load_history(path)?,
            None => Vec::new(),
        };
        Ok(Self::new(history, config.snapshot_path.clone()))
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Host input for the current timeline position.
    pub fn host_input(&self) -> HostInput<'_> {
        HostInput::from_timeline(&self.timeline, &self.selected)
    }

    /// Selection updater handed down through the host.
    pub fn set_selected(&mut self, update: SetState<Vec<SelectedEntry>>) {
        apply_selection(&mut self.selected, update);
        self.mark_dirty();
    }

    pub(crate) fn after_timeline_move(&mut self, moved: bool) {
        if moved {
            debug!(
                cursor = self.timeline.cursor(),
                len = self.timeline.len(),
                "timeline moved"
            );
            self.status = None;
            self.mark_dirty();
        }
    }

    /// Re-read the snapshot file. On failure the current history is kept.
    pub fn reload(&mut self) -> bool {
        self.mark_dirty();
        let Some(path) = self.snapshot_path.clone() else {
            self.status = Some(StatusMessage::Info(
                "No snapshot file to reload".to_string(),
            ));
            return false;
        };
        match load_history(&path) {
            Ok(history) => {
                self.replace_history(history);
                self.status = Some(StatusMessage::Info(format!(
                    "Reloaded {} snapshot(s) from {}",
                    self.timeline.len(),
                    display_name(&path)
                )));
                true
            }
            Err(err) => {
                warn!(error = %err, path = %path.display(), "reload failed");
                self.status = Some(StatusMessage::Error(err.user_message()));
                false
            }
        }
    }

    /// Swap in a new history. Names not seen before join the selection.
    pub fn replace_history(&mut self, history: Vec<Snapshot>) {
        let known = node_names(self.timeline.history());
        let new_names: Vec<String> = node_names(&history)
            .into_iter()
            .filter(|name| known.binary_search(name).is_err())
            .collect();
        if !new_names.is_empty() {
            debug!(count = new_names.len(), "new nodes added to selection");
            self.selected
                .extend(new_names.into_iter().map(SelectedEntry::new));
        }
        self.timeline.replace_history(history);
        self.mark_dirty();
    }
}

fn apply_selection(selected: &mut Vec<SelectedEntry>, update: SetState<Vec<SelectedEntry>>) {
    update.apply_to(selected);
    debug!(selected = selected.len(), "selection changed");
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
