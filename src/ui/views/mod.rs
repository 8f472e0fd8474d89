//! Text renderers for the six views.
//!
//! Each view is built from exactly the data it needs and lays out its lines
//! when constructed. Drawing a constructed view only copies those lines into
//! the frame, so the host can build every view each frame and show one.

pub mod atom_network;
pub mod component_graph;
pub mod diff;
pub mod settings;
pub mod state_graph;
pub mod tree;

pub use atom_network::AtomNetworkView;
pub use component_graph::ComponentGraphView;
pub use diff::{diff_snapshots, DiffView, NodeChange};
pub use settings::{settings_rows, SettingsRow, SettingsSetters, SettingsView};
pub use state_graph::StateGraphView;
pub use tree::TreeView;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_ATOM, COLOR_BORDER, COLOR_DIM, COLOR_SELECTOR};
use crate::host::ViewInstance;
use crate::models::NodeKind;

/// Shown by every view while no snapshot has been captured.
pub const NO_SNAPSHOT: &str = "No snapshot captured yet";

/// Widest a JSON value is allowed to get on a single line.
pub(crate) const MAX_VALUE_WIDTH: usize = 60;

pub(crate) fn placeholder_lines() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        NO_SNAPSHOT,
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    ))]
}

pub(crate) fn node_style(kind: NodeKind) -> Style {
    match kind {
        NodeKind::Atom => Style::default().fg(COLOR_ATOM),
        NodeKind::Selector => Style::default().fg(COLOR_SELECTOR),
    }
}

/// Compact single-line JSON, truncated to `max_width` columns.
pub(crate) fn compact_json(value: &serde_json::Value, max_width: usize) -> String {
    truncate_to_width(&value.to_string(), max_width)
}

/// Truncate `text` to at most `max_width` display columns, marking the cut
/// with an ellipsis.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Draw one constructed view into `area`, scrolled down by `scroll` lines.
pub fn render_view(frame: &mut Frame, area: Rect, view: &ViewInstance<'_>, scroll: u16) {
    let block = Block::bordered()
        .title(Line::from(format!(" {} ", view.tab().name())))
        .border_style(Style::default().fg(COLOR_BORDER));

    // Settings scrolls to keep its cursor visible instead of using a free offset.
    let scroll = match view {
        ViewInstance::Settings(settings) => {
            let visible = area.height.saturating_sub(2);
            settings.cursor_line().saturating_sub(visible.saturating_sub(1))
        }
        _ => scroll,
    };

    let text = Text::from(view.lines().to_vec());
    frame.render_widget(Paragraph::new(text).block(block).scroll((scroll, 0)), area);
}
