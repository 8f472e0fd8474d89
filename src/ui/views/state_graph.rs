//! State Graph view: the raw node inventory of one capture, grouped by kind.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{node_style, placeholder_lines};
use crate::models::{FilteredSnapshot, NodeKind};
use crate::ui::theme::COLOR_DIM;

pub struct StateGraphView<'a> {
    pub filtered_cur_snap: Option<&'a FilteredSnapshot>,
    lines: Vec<Line<'static>>,
}

impl<'a> StateGraphView<'a> {
    pub fn new(filtered_cur_snap: Option<&'a FilteredSnapshot>) -> Self {
        let lines = match filtered_cur_snap {
            None => placeholder_lines(),
            Some(cur) => graph_lines(cur),
        };
        Self {
            filtered_cur_snap,
            lines,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

fn graph_lines(snap: &FilteredSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (heading, kind) in [("Atoms", NodeKind::Atom), ("Selectors", NodeKind::Selector)] {
        let nodes: Vec<_> = snap.iter().filter(|(_, n)| n.kind == kind).collect();
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("{} ({})", heading, nodes.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (name, node) in nodes {
            lines.push(Line::from(vec![
                Span::raw("  ● "),
                Span::styled(name.clone(), node_style(kind)),
                Span::styled(
                    format!(
                        "  deps:{} subs:{}",
                        node.node_deps.len(),
                        node.node_to_node_subscriptions.len()
                    ),
                    Style::default().fg(COLOR_DIM),
                ),
            ]));
        }
    }
    lines
}
