//! Settings view: capture settings and the visible-node selection.
//!
//! The view displays values owned elsewhere. Changes go out through
//! [`SettingsSetters`]: capture settings to the host, selection to the app.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::host::SetState;
use crate::models::{node_names, SelectedEntry, Snapshot};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Lines above the first selectable node row.
const NODE_ROWS_START: usize = 5;

/// Longest throttle value the row accepts.
pub const MAX_THROTTLE_DIGITS: usize = 6;

/// One focusable row of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRow {
    Persist,
    Throttle,
    Node(String),
}

/// Rows for a given history: the two capture settings, then one row per node
/// name seen anywhere in the history.
pub fn settings_rows(history: &[Snapshot]) -> Vec<SettingsRow> {
    let mut rows = vec![SettingsRow::Persist, SettingsRow::Throttle];
    rows.extend(node_names(history).into_iter().map(SettingsRow::Node));
    rows
}

/// Setters the settings view may call. Nothing else is writable from here.
pub struct SettingsSetters<'s> {
    pub set_selected: &'s mut dyn FnMut(SetState<Vec<SelectedEntry>>),
    pub set_checked: &'s mut dyn FnMut(SetState<bool>),
    pub set_throttle_display: &'s mut dyn FnMut(SetState<String>),
}

pub struct SettingsView<'a> {
    pub snapshot_history: &'a [Snapshot],
    pub selected: &'a [SelectedEntry],
    pub checked: bool,
    pub throttle_display: &'a str,
    pub cursor: usize,
    lines: Vec<Line<'static>>,
    cursor_line: u16,
}

impl<'a> SettingsView<'a> {
    pub fn new(
        snapshot_history: &'a [Snapshot],
        selected: &'a [SelectedEntry],
        checked: bool,
        throttle_display: &'a str,
        cursor: usize,
    ) -> Self {
        let rows = settings_rows(snapshot_history);
        let cursor = cursor.min(rows.len() - 1);
        let lines = settings_lines(&rows, selected, checked, throttle_display, cursor);
        let cursor_line = match cursor {
            0 => 1,
            1 => 2,
            n => NODE_ROWS_START + (n - 2),
        };
        Self {
            snapshot_history,
            selected,
            checked,
            throttle_display,
            cursor,
            lines,
            cursor_line: u16::try_from(cursor_line).unwrap_or(u16::MAX),
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Line index of the focused row.
    pub fn cursor_line(&self) -> u16 {
        self.cursor_line
    }
}

fn row_line(focused: bool, text: String) -> Line<'static> {
    let (marker, style) = if focused {
        (
            "› ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    };
    Line::from(vec![Span::styled(marker, style), Span::styled(text, style)])
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn settings_lines(
    rows: &[SettingsRow],
    selected: &[SelectedEntry],
    checked: bool,
    throttle_display: &str,
    cursor: usize,
) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let node_count = rows.len() - 2;
    let visible = rows
        .iter()
        .filter(|row| match row {
            SettingsRow::Node(name) => selected.iter().any(|e| &e.name == name),
            _ => false,
        })
        .count();

    let mut lines = vec![Line::from(Span::styled("Capture", heading))];
    for (idx, row) in rows.iter().enumerate() {
        let text = match row {
            SettingsRow::Persist => format!("{} Persist state across reloads", checkbox(checked)),
            SettingsRow::Throttle => format!("Throttle (ms): {}", throttle_display),
            SettingsRow::Node(name) => format!(
                "{} {}",
                checkbox(selected.iter().any(|e| &e.name == name)),
                name
            ),
        };
        if idx == 2 {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Visible nodes ({}/{})", visible, node_count),
                heading,
            )));
        }
        lines.push(row_line(idx == cursor, text));
    }
    if node_count == 0 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "No nodes captured yet",
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "space toggle · 0-9 edit throttle · a all · n none",
        Style::default().fg(COLOR_DIM),
    )));
    lines
}

fn toggle_entry(prev: &[SelectedEntry], name: &str) -> Vec<SelectedEntry> {
    if prev.iter().any(|e| e.name == name) {
        prev.iter().filter(|e| e.name != name).cloned().collect()
    } else {
        let mut next = prev.to_vec();
        next.push(SelectedEntry::new(name));
        next
    }
}

/// Keyboard input while Settings is active.
pub fn handle_key(
    key: KeyEvent,
    rows: &[SettingsRow],
    cursor: &mut usize,
    setters: &mut SettingsSetters<'_>,
) -> bool {
    *cursor = (*cursor).min(rows.len().saturating_sub(1));
    let focused = rows.get(*cursor);

    match key.code {
        KeyCode::Up => {
            *cursor = cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if *cursor + 1 < rows.len() {
                *cursor += 1;
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => match focused {
            Some(SettingsRow::Persist) => {
                (setters.set_checked)(SetState::update(|prev: &bool| !prev));
            }
            Some(SettingsRow::Node(name)) => {
                let name = name.clone();
                (setters.set_selected)(SetState::update(move |prev: &Vec<SelectedEntry>| {
                    toggle_entry(prev, &name)
                }));
            }
            _ => return false,
        },
        KeyCode::Char(c) if c.is_ascii_digit() && focused == Some(&SettingsRow::Throttle) => {
            (setters.set_throttle_display)(SetState::update(move |prev: &String| {
                if prev.len() >= MAX_THROTTLE_DIGITS {
                    prev.clone()
                } else {
                    format!("{}{}", prev, c)
                }
            }));
        }
        KeyCode::Backspace if focused == Some(&SettingsRow::Throttle) => {
            (setters.set_throttle_display)(SetState::update(|prev: &String| {
                let mut next = prev.clone();
                next.pop();
                next
            }));
        }
        KeyCode::Char('a') => {
            let all = rows
                .iter()
                .filter_map(|row| match row {
                    SettingsRow::Node(name) => Some(SelectedEntry::new(name.as_str())),
                    _ => None,
                })
                .collect();
            (setters.set_selected)(SetState::Replace(all));
        }
        KeyCode::Char('n') => {
            (setters.set_selected)(SetState::Replace(Vec::new()));
        }
        _ => return false,
    }
    true
}
