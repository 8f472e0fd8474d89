//! UI rendering for snaplens.
//!
//! A frame is the navigation bar, the active view and a status line. Every
//! view is composed each frame by the [`ViewHost`](crate::host::ViewHost);
//! only the active one is drawn.

mod layout;
pub mod nav_bar;
mod status_bar;
pub mod theme;
pub mod views;

pub use layout::{FrameLayout, NAV_HEIGHT, STATUS_HEIGHT};
pub use nav_bar::{render_nav_bar, tab_at};
pub use status_bar::{render_status_bar, status_line};
pub use views::render_view;

use ratatui::Frame;

use crate::app::App;

/// Render the full frame and remember its layout for mouse hit-testing.
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = FrameLayout::new(frame.area());
    let active = app.host.active_tab();

    let line_count = {
        let input = app.host_input();
        let mapping = app.host.compose(&input);
        render_nav_bar(frame, layout.nav, &mapping.names(), active);

        let view = mapping.get(active);
        let max_scroll = u16::try_from(view.lines().len().saturating_sub(1)).unwrap_or(u16::MAX);
        let scroll = app.host.scroll_offset(active).min(max_scroll);
        render_view(frame, layout.body, view, scroll);
        view.lines().len()
    };

    app.host.clamp_scroll(active, line_count);
    render_status_bar(frame, layout.status, app);
    app.last_layout = layout;
}
