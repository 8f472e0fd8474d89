//! Frame layout: navigation bar on top, the active view, a status line.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows taken by the bordered navigation bar.
pub const NAV_HEIGHT: u16 = 3;
/// Rows taken by the status line.
pub const STATUS_HEIGHT: u16 = 1;

/// Areas of one frame. Kept after each draw so mouse events can be mapped
/// back to the region they landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl FrameLayout {
    pub fn new(area: Rect) -> Self {
        let [nav, body, status] = Layout::vertical([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);
        Self { nav, body, status }
    }

    /// Rows of view content visible inside the bordered body.
    pub fn visible_body_rows(&self) -> u16 {
        self.body.height.saturating_sub(2)
    }
}
