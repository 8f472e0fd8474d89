//! State Diff view: what changed between the previous and current capture.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{compact_json, placeholder_lines, MAX_VALUE_WIDTH};
use crate::models::{FilteredSnapshot, Node};
use crate::ui::theme::{COLOR_ADDED, COLOR_CHANGED, COLOR_DIM, COLOR_REMOVED};

/// One node-level difference between two filtered snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange<'a> {
    Added { name: &'a str, node: &'a Node },
    Removed { name: &'a str, node: &'a Node },
    Changed {
        name: &'a str,
        before: &'a Node,
        after: &'a Node,
    },
}

impl NodeChange<'_> {
    pub fn name(&self) -> &str {
        match self {
            NodeChange::Added { name, .. }
            | NodeChange::Removed { name, .. }
            | NodeChange::Changed { name, .. } => *name,
        }
    }
}

/// Compare two filtered snapshots node by node.
///
/// With no previous snapshot every current node counts as added. Changes are
/// listed in current-snapshot order, followed by removals.
pub fn diff_snapshots<'a>(
    prev: Option<&'a FilteredSnapshot>,
    cur: &'a FilteredSnapshot,
) -> Vec<NodeChange<'a>> {
    let mut changes: Vec<NodeChange<'a>> = cur
        .iter()
        .filter_map(|(name, after)| match prev.and_then(|p| p.get(name)) {
            None => Some(NodeChange::Added { name, node: after }),
            Some(before) if before != after => Some(NodeChange::Changed {
                name,
                before,
                after,
            }),
            Some(_) => None,
        })
        .collect();

    if let Some(prev) = prev {
        changes.extend(
            prev.iter()
                .filter(|(name, _)| !cur.contains_key(*name))
                .map(|(name, node)| NodeChange::Removed { name, node }),
        );
    }
    changes
}

pub struct DiffView<'a> {
    pub filtered_prev_snap: Option<&'a FilteredSnapshot>,
    pub filtered_cur_snap: Option<&'a FilteredSnapshot>,
    lines: Vec<Line<'static>>,
}

impl<'a> DiffView<'a> {
    pub fn new(
        filtered_prev_snap: Option<&'a FilteredSnapshot>,
        filtered_cur_snap: Option<&'a FilteredSnapshot>,
    ) -> Self {
        let lines = match filtered_cur_snap {
            None => placeholder_lines(),
            Some(cur) => diff_lines(&diff_snapshots(filtered_prev_snap, cur)),
        };
        Self {
            filtered_prev_snap,
            filtered_cur_snap,
            lines,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

fn diff_lines(changes: &[NodeChange<'_>]) -> Vec<Line<'static>> {
    if changes.is_empty() {
        return vec![Line::from(Span::styled(
            "No changes between snapshots",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    changes
        .iter()
        .map(|change| {
            let (marker, color) = match change {
                NodeChange::Added { .. } => ("+ ", COLOR_ADDED),
                NodeChange::Removed { .. } => ("- ", COLOR_REMOVED),
                NodeChange::Changed { .. } => ("~ ", COLOR_CHANGED),
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(
                    change.name().to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
            ];
            match change {
                NodeChange::Added { node, .. } | NodeChange::Removed { node, .. } => {
                    spans.push(Span::raw(compact_json(&node.contents, MAX_VALUE_WIDTH)));
                }
                NodeChange::Changed { before, after, .. } => {
                    let half = MAX_VALUE_WIDTH / 2;
                    spans.push(Span::styled(
                        compact_json(&before.contents, half),
                        Style::default().fg(COLOR_DIM),
                    ));
                    spans.push(Span::raw(" → "));
                    spans.push(Span::raw(compact_json(&after.contents, half)));
                }
            }
            Line::from(spans)
        })
        .collect()
}
