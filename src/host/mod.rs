//! View host: owns the state shared across views and composes them.
//!
//! | Module | Holds |
//! |--------|-------|
//! | `tab` | The closed set of view names |
//! | `zoom` | Component graph pan/zoom |
//! | `capture` | Persist toggle and throttle string |
//! | `derive` | Borrowed projections of the snapshot pair |
//! | `mapping` | The six constructed views |
//! | `set_state` | Setter contract handed to views |
//!
//! The host owns zoom and capture settings so they survive tab switches.
//! Snapshots and the selection belong to the caller and arrive per render
//! through [`HostInput`].

mod capture;
mod derive;
mod mapping;
mod set_state;
mod tab;
mod zoom;

pub use capture::CaptureSettings;
pub use derive::DerivedSnapshots;
pub use mapping::{ViewInstance, ViewMapping};
pub use set_state::SetState;
pub use tab::Tab;
pub use zoom::{ZoomState, MAX_SCALE, MIN_SCALE, X_UNITS_PER_COLUMN, Y_UNITS_PER_ROW, ZOOM_STEP};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::models::{SelectedEntry, Snapshot};
use crate::timeline::Timeline;
use crate::ui::nav_bar;
use crate::ui::views::{component_graph, settings, settings_rows, SettingsRow, SettingsSetters};

/// Lines moved per PageUp/PageDown in read-only views.
const PAGE_LINES: u16 = 10;
/// Lines moved per mouse wheel notch in read-only views.
const WHEEL_LINES: u16 = 3;

/// Per-render input from the owner of snapshots and selection.
#[derive(Debug, Clone, Copy)]
pub struct HostInput<'a> {
    pub previous_snapshot: Option<&'a Snapshot>,
    pub current_snapshot: Option<&'a Snapshot>,
    pub snapshot_history: &'a [Snapshot],
    pub selected: &'a [SelectedEntry],
}

impl<'a> HostInput<'a> {
    pub fn new(
        previous_snapshot: Option<&'a Snapshot>,
        current_snapshot: Option<&'a Snapshot>,
        snapshot_history: &'a [Snapshot],
        selected: &'a [SelectedEntry],
    ) -> Self {
        Self {
            previous_snapshot,
            current_snapshot,
            snapshot_history,
            selected,
        }
    }

    /// Input for the timeline's current position.
    pub fn from_timeline(timeline: &'a Timeline, selected: &'a [SelectedEntry]) -> Self {
        Self::new(
            timeline.previous(),
            timeline.current(),
            timeline.history(),
            selected,
        )
    }
}

#[derive(Debug, Default)]
pub struct ViewHost {
    active_tab: Tab,
    zoom_state: ZoomState,
    capture: CaptureSettings,
    settings_cursor: usize,
    scroll: [u16; Tab::COUNT],
    drag_anchor: Option<(u16, u16)>,
}

impl ViewHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn zoom_state(&self) -> ZoomState {
        self.zoom_state
    }

    pub fn capture_settings(&self) -> &CaptureSettings {
        &self.capture
    }

    pub fn settings_cursor(&self) -> usize {
        self.settings_cursor
    }

    pub fn scroll_offset(&self, tab: Tab) -> u16 {
        self.scroll[tab.index()]
    }

    /// Build all six views for this render.
    pub fn compose<'a>(&'a self, input: &HostInput<'a>) -> ViewMapping<'a> {
        ViewMapping::compose(input, self.zoom_state, &self.capture, self.settings_cursor)
    }

    /// Navigation bar callback.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        debug!(from = %self.active_tab, to = %tab, "tab selected");
        self.active_tab = tab;
        self.drag_anchor = None;
    }

    /// Setter handed to the component graph.
    pub(crate) fn set_zoom_state(&mut self, update: SetState<ZoomState>) {
        apply_zoom(&mut self.zoom_state, update);
    }

    /// Keep a read-only view's scroll offset within its content.
    pub fn clamp_scroll(&mut self, tab: Tab, line_count: usize) {
        let max = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
        let offset = &mut self.scroll[tab.index()];
        *offset = (*offset).min(max);
    }

    /// Route a key to the navigation bar, then to the active view.
    ///
    /// Digits go to the settings view while the throttle row is focused.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        history: &[Snapshot],
        set_selected: &mut dyn FnMut(SetState<Vec<SelectedEntry>>),
    ) -> bool {
        let rows = if self.active_tab == Tab::Settings {
            settings_rows(history)
        } else {
            Vec::new()
        };
        if !rows.is_empty() {
            self.settings_cursor = self.settings_cursor.min(rows.len() - 1);
        }
        let throttle_focused = rows.get(self.settings_cursor) == Some(&SettingsRow::Throttle);

        if !throttle_focused {
            let mut chosen = None;
            if nav_bar::handle_key(key, self.active_tab, &mut |tab| chosen = Some(tab)) {
                if let Some(tab) = chosen {
                    self.select_tab(tab);
                }
                return true;
            }
        }

        match self.active_tab {
            Tab::ComponentGraph => {
                component_graph::handle_key(key, &mut |update| self.set_zoom_state(update))
            }
            Tab::Settings => {
                let CaptureSettings {
                    persist_enabled,
                    throttle_rate,
                } = &mut self.capture;
                let mut set_checked = |update: SetState<bool>| {
                    update.apply_to(persist_enabled);
                    debug!(persist_enabled = *persist_enabled, "capture persist changed");
                };
                let mut set_throttle_display = |update: SetState<String>| {
                    update.apply_to(throttle_rate);
                    debug!(throttle_rate = %throttle_rate, "capture throttle changed");
                };
                let mut setters = SettingsSetters {
                    set_selected,
                    set_checked: &mut set_checked,
                    set_throttle_display: &mut set_throttle_display,
                };
                settings::handle_key(key, &rows, &mut self.settings_cursor, &mut setters)
            }
            tab => self.scroll_by_key(tab, key),
        }
    }

    /// Route a mouse event: tab clicks on `nav`, view input on `body`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, nav: Rect, body: Rect) -> bool {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            if let Some(tab) = nav_bar::tab_at(nav, mouse.column, mouse.row) {
                self.select_tab(tab);
                return true;
            }
        }

        match self.active_tab {
            Tab::ComponentGraph => {
                let zoom_state = &mut self.zoom_state;
                component_graph::handle_mouse(mouse, body, &mut self.drag_anchor, &mut |update| {
                    apply_zoom(zoom_state, update)
                })
            }
            Tab::Settings => false,
            tab => {
                if !body.contains(Position::new(mouse.column, mouse.row)) {
                    return false;
                }
                let offset = &mut self.scroll[tab.index()];
                match mouse.kind {
                    MouseEventKind::ScrollUp => *offset = offset.saturating_sub(WHEEL_LINES),
                    MouseEventKind::ScrollDown => *offset = offset.saturating_add(WHEEL_LINES),
                    _ => return false,
                }
                true
            }
        }
    }

    fn scroll_by_key(&mut self, tab: Tab, key: KeyEvent) -> bool {
        let offset = &mut self.scroll[tab.index()];
        match key.code {
            KeyCode::Up => *offset = offset.saturating_sub(1),
            KeyCode::Down => *offset = offset.saturating_add(1),
            KeyCode::PageUp => *offset = offset.saturating_sub(PAGE_LINES),
            KeyCode::PageDown => *offset = offset.saturating_add(PAGE_LINES),
            _ => return false,
        }
        true
    }
}

fn apply_zoom(zoom_state: &mut ZoomState, update: SetState<ZoomState>) {
    update.apply_to(zoom_state);
    debug!(
        x = zoom_state.x,
        y = zoom_state.y,
        k = zoom_state.k,
        "zoom state changed"
    );
}
