//! State Tree view: the current capture as an expanded tree.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{node_style, placeholder_lines};
use crate::models::FilteredSnapshot;
use crate::ui::theme::COLOR_DIM;

const CONTENT_INDENT: &str = "    ";

pub struct TreeView<'a> {
    pub filtered_cur_snap: Option<&'a FilteredSnapshot>,
    lines: Vec<Line<'static>>,
}

impl<'a> TreeView<'a> {
    pub fn new(filtered_cur_snap: Option<&'a FilteredSnapshot>) -> Self {
        let lines = match filtered_cur_snap {
            None => placeholder_lines(),
            Some(cur) => tree_lines(cur),
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

fn tree_lines(snap: &FilteredSnapshot) -> Vec<Line<'static>> {
    if snap.is_empty() {
        return vec![Line::from(Span::styled(
            "Snapshot has no nodes",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    let mut lines = Vec::new();
    for (name, node) in snap {
        lines.push(Line::from(vec![
            Span::raw("▾ "),
            Span::styled(
                name.clone(),
                node_style(node.kind).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", node.kind.label()),
                Style::default().fg(COLOR_DIM),
            ),
        ]));

        let pretty = serde_json::to_string_pretty(&node.contents)
            .unwrap_or_else(|_| node.contents.to_string());
        lines.extend(
            pretty
                .lines()
                .map(|line| Line::from(format!("{}{}", CONTENT_INDENT, line))),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, NodeKind};
    use serde_json::json;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tree_expands_contents() {
        let mut snap = FilteredSnapshot::new();
        snap.insert(
            "filter".into(),
            Node {
                kind: NodeKind::Selector,
                contents: json!({"done": true}),
                ..Node::default()
            },
        );
        let view = TreeView::new(Some(&snap));
        let text: Vec<String> = view.lines().iter().map(line_text).collect();
        assert_eq!(
            text,
            vec!["▾ filter (selector)", "    {", "      \"done\": true", "    }"]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let snap = FilteredSnapshot::new();
        let view = TreeView::new(Some(&snap));
        assert_eq!(line_text(&view.lines()[0]), "Snapshot has no nodes");
    }

    #[test]
    fn test_absent_snapshot() {
        let view = TreeView::new(None);
        assert!(view.filtered_cur_snap.is_none());
        assert_eq!(line_text(&view.lines()[0]), super::super::NO_SNAPSHOT);
    }
}
