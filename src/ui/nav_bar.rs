//! Navigation bar: the six tab titles and the active one.
//!
//! The bar never changes host state itself. Keys and clicks resolve to a
//! [`Tab`] handed to the caller's callback.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::host::Tab;

/// Columns between adjacent titles: one pad on each side plus the divider.
const TITLE_PADDING: u16 = 2;
const DIVIDER_WIDTH: u16 = 1;

pub fn render_nav_bar(frame: &mut Frame, area: Rect, names: &[&str], active: Tab) {
    let tabs = Tabs::new(names.iter().map(|name| Line::from(*name)))
        .select(active.index())
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::bordered()
                .title(" snaplens ")
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(tabs, area);
}

/// Tab whose title covers the cell at (`column`, `row`) inside `area`.
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
    let inner = Block::bordered().inner(area);
    if row != inner.y || column < inner.x || column >= inner.right() {
        return None;
    }
    let mut start = inner.x;
    for tab in Tab::ALL {
        let width = tab.name().width() as u16 + TITLE_PADDING;
        if column < start + width {
            return Some(tab);
        }
        start += width + DIVIDER_WIDTH;
        if column < start {
            // On the divider.
            return None;
        }
    }
    None
}

/// `Tab`/`Shift+Tab` cycle, `1`–`6` jump. Returns whether the key was consumed.
pub fn handle_key(key: KeyEvent, active: Tab, on_change: &mut dyn FnMut(Tab)) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    let next = match key.code {
        KeyCode::Tab => active.next(),
        KeyCode::BackTab => active.prev(),
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            match Tab::from_index(index) {
                Some(tab) => tab,
                None => return false,
            }
        }
        _ => return false,
    };
    on_change(next);
    true
}
