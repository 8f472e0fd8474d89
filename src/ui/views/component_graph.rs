//! Component Graph view: which components subscribe to which state nodes.
//!
//! The component tree is laid out as an indented outline, then shifted and
//! spaced according to the pan/zoom state owned by the host. The view never
//! stores pan/zoom itself; input handlers report changes through the setter
//! they are given.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{node_style, placeholder_lines};
use crate::host::{SetState, ZoomState};
use crate::models::{ComponentAtomTree, FilteredSnapshot};
use crate::ui::theme::COLOR_DIM;

pub struct ComponentGraphView<'a> {
    pub component_atom_tree: Option<&'a ComponentAtomTree>,
    pub filtered_cur_snap: Option<&'a FilteredSnapshot>,
    pub zoom: ZoomState,
    lines: Vec<Line<'static>>,
}

impl<'a> ComponentGraphView<'a> {
    pub fn new(
        component_atom_tree: Option<&'a ComponentAtomTree>,
        filtered_cur_snap: Option<&'a FilteredSnapshot>,
        zoom: ZoomState,
    ) -> Self {
        let lines = match component_atom_tree {
            None => placeholder_lines(),
            Some(tree) => apply_viewport(layout_tree(tree, filtered_cur_snap, &zoom), &zoom),
        };
        Self {
            component_atom_tree,
            filtered_cur_snap,
            zoom,
            lines,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

fn layout_tree(
    tree: &ComponentAtomTree,
    snap: Option<&FilteredSnapshot>,
    zoom: &ZoomState,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    walk(tree, 0, zoom.indent_width(), snap, &mut lines);
    lines
}

fn walk(
    node: &ComponentAtomTree,
    depth: usize,
    indent: usize,
    snap: Option<&FilteredSnapshot>,
    lines: &mut Vec<Line<'static>>,
) {
    let mut spans = Vec::new();
    if depth > 0 {
        spans.push(Span::raw(format!("{}└ ", " ".repeat((depth - 1) * indent))));
    }
    spans.push(Span::styled(
        node.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for subscribed in &node.recoil_nodes {
        let style = snap
            .and_then(|s| s.get(subscribed))
            .map(|n| node_style(n.kind))
            .unwrap_or_else(|| Style::default().fg(COLOR_DIM));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("[{}]", subscribed), style));
    }
    if let Some(duration) = node.actual_duration {
        spans.push(Span::styled(
            format!(" {:.1}ms", duration),
            Style::default().fg(COLOR_DIM),
        ));
    }
    lines.push(Line::from(spans));

    for child in &node.children {
        walk(child, depth + 1, indent, snap, lines);
    }
}

/// Shift the laid-out diagram by the viewport offsets, clipping anything
/// pushed past the top or left edge. Positive offsets stop at the diagram's
/// own height and width.
fn apply_viewport(lines: Vec<Line<'static>>, zoom: &ZoomState) -> Vec<Line<'static>> {
    let height = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    let width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let rows = zoom.row_offset().min(height);
    let cols = zoom.column_offset().min(width);

    let shifted = lines.into_iter().map(|line| {
        if cols >= 0 {
            let mut spans = vec![Span::raw(" ".repeat(cols as usize))];
            spans.extend(line.spans);
            Line::from(spans)
        } else {
            clip_left(line, cols.unsigned_abs() as usize)
        }
    });

    if rows >= 0 {
        std::iter::repeat_with(Line::default)
            .take(rows as usize)
            .chain(shifted)
            .collect()
    } else {
        shifted.skip(rows.unsigned_abs() as usize).collect()
    }
}

/// Drop `columns` display columns from the start of a line. A wide character
/// cut in half leaves blank padding in its place.
fn clip_left(line: Line<'static>, mut columns: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for span in line.spans {
        if columns == 0 {
            spans.push(span);
            continue;
        }
        let width = span.content.width();
        if width <= columns {
            columns -= width;
            continue;
        }
        let mut rest = String::new();
        for ch in span.content.chars() {
            if columns == 0 {
                rest.push(ch);
                continue;
            }
            let ch_width = ch.width().unwrap_or(0);
            if ch_width <= columns {
                columns -= ch_width;
            } else {
                rest.push_str(&" ".repeat(ch_width - columns));
                columns = 0;
            }
        }
        spans.push(Span::styled(rest, span.style));
    }
    Line::from(spans)
}

/// Keyboard input while the Component Graph is active.
pub fn handle_key(key: KeyEvent, set_zoom_state: &mut dyn FnMut(SetState<ZoomState>)) -> bool {
    let update = match key.code {
        KeyCode::Left => SetState::update(|z: &ZoomState| z.panned(-1, 0)),
        KeyCode::Right => SetState::update(|z: &ZoomState| z.panned(1, 0)),
        KeyCode::Up => SetState::update(|z: &ZoomState| z.panned(0, -1)),
        KeyCode::Down => SetState::update(|z: &ZoomState| z.panned(0, 1)),
        KeyCode::Char('+') | KeyCode::Char('=') => SetState::update(|z: &ZoomState| z.zoomed_in()),
        KeyCode::Char('-') => SetState::update(|z: &ZoomState| z.zoomed_out()),
        KeyCode::Char('0') => SetState::Replace(ZoomState::default()),
        _ => return false,
    };
    set_zoom_state(update);
    true
}

/// Mouse input over the Component Graph body: drag to pan, wheel to zoom.
///
/// `drag_anchor` is the last cell the drag was seen at.
pub fn handle_mouse(
    mouse: MouseEvent,
    body: Rect,
    drag_anchor: &mut Option<(u16, u16)>,
    set_zoom_state: &mut dyn FnMut(SetState<ZoomState>),
) -> bool {
    let inside = body.contains(Position::new(mouse.column, mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            *drag_anchor = Some((mouse.column, mouse.row));
            true
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some((col, row)) = *drag_anchor else {
                return false;
            };
            let dx = i32::from(mouse.column) - i32::from(col);
            let dy = i32::from(mouse.row) - i32::from(row);
            *drag_anchor = Some((mouse.column, mouse.row));
            if dx == 0 && dy == 0 {
                return false;
            }
            set_zoom_state(SetState::update(move |z: &ZoomState| z.panned(dx, dy)));
            true
        }
        MouseEventKind::Up(MouseButton::Left) => drag_anchor.take().is_some(),
        MouseEventKind::ScrollUp if inside => {
            set_zoom_state(SetState::update(|z: &ZoomState| z.zoomed_in()));
            true
        }
        MouseEventKind::ScrollDown if inside => {
            set_zoom_state(SetState::update(|z: &ZoomState| z.zoomed_out()));
            true
        }
        _ => false,
    }
}
