//! Atom Network view: subscription edges between state nodes.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{node_style, placeholder_lines};
use crate::models::FilteredSnapshot;
use crate::ui::theme::COLOR_DIM;

pub struct AtomNetworkView<'a> {
    pub filtered_cur_snap: Option<&'a FilteredSnapshot>,
    lines: Vec<Line<'static>>,
}

impl<'a> AtomNetworkView<'a> {
    pub fn new(filtered_cur_snap: Option<&'a FilteredSnapshot>) -> Self {
        let lines = match filtered_cur_snap {
            None => placeholder_lines(),
            Some(cur) => network_lines(cur),
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

fn edge_line(arrow: &'static str, target: &str, snap: &FilteredSnapshot) -> Line<'static> {
    let style = snap
        .get(target)
        .map(|n| node_style(n.kind))
        .unwrap_or_else(|| Style::default().fg(COLOR_DIM));
    Line::from(vec![
        Span::styled(format!("  {} ", arrow), Style::default().fg(COLOR_DIM)),
        Span::styled(target.to_string(), style),
    ])
}

fn network_lines(snap: &FilteredSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (name, node) in snap {
        lines.push(Line::from(Span::styled(
            name.clone(),
            node_style(node.kind).add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            node.node_to_node_subscriptions
                .iter()
                .map(|sub| edge_line("→", sub, snap)),
        );
        lines.extend(node.node_deps.iter().map(|dep| edge_line("←", dep, snap)));
        if node.node_to_node_subscriptions.is_empty() && node.node_deps.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (isolated)",
                Style::default().fg(COLOR_DIM),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, NodeKind};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_edges_in_both_directions() {
        let mut snap = FilteredSnapshot::new();
        snap.insert(
            "list".into(),
            Node {
                node_to_node_subscriptions: vec!["stats".into()],
                ..Node::default()
            },
        );
        snap.insert(
            "stats".into(),
            Node {
                kind: NodeKind::Selector,
                node_deps: vec!["list".into()],
                ..Node::default()
            },
        );
        snap.insert("lonely".into(), Node::default());

        let view = AtomNetworkView::new(Some(&snap));
        let text: Vec<String> = view.lines().iter().map(line_text).collect();
        assert_eq!(
            text,
            vec!["list", "  → stats", "lonely", "  (isolated)", "stats", "  ← list"]
        );
    }

    #[test]
    fn test_absent_snapshot() {
        let view = AtomNetworkView::new(None);
        assert_eq!(line_text(&view.lines()[0]), super::super::NO_SNAPSHOT);
    }
}
