//! Captured state snapshots.
//!
//! Field names follow the capture format (camelCase JSON), so a snapshot
//! exported by the capturing side deserializes without a translation step.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The reduced per-node payload of a snapshot, keyed by node name.
pub type FilteredSnapshot = BTreeMap<String, Node>;

/// Whether a state node is writable (atom) or derived (selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    #[serde(rename = "RecoilState")]
    Atom,
    #[serde(rename = "RecoilValueReadOnly")]
    Selector,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Atom => "atom",
            NodeKind::Selector => "selector",
        }
    }
}

/// One atom or selector as seen in a single capture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub contents: Value,
    /// Nodes this node reads from.
    #[serde(default)]
    pub node_deps: Vec<String>,
    /// Nodes that read from this node.
    #[serde(default)]
    pub node_to_node_subscriptions: Vec<String>,
}

/// A UI component and the state nodes it subscribes to, with its children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAtomTree {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: u32,
    #[serde(default)]
    pub children: Vec<ComponentAtomTree>,
    #[serde(default)]
    pub recoil_nodes: Vec<String>,
    /// Render duration in milliseconds, when the capture recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<f64>,
}

impl ComponentAtomTree {
    /// Number of components in this subtree, including the root.
    pub fn component_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ComponentAtomTree::component_count)
            .sum::<usize>()
    }
}

/// One immutable capture of application state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub filtered_snapshot: FilteredSnapshot,
    #[serde(default)]
    pub component_atom_tree: ComponentAtomTree,
}

/// An entity name the user has chosen to keep visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedEntry {
    pub name: String,
}

impl SelectedEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for SelectedEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Every node name that appears anywhere in the history, sorted and deduplicated.
pub fn node_names(history: &[Snapshot]) -> Vec<String> {
    history
        .iter()
        .flat_map(|snap| snap.filtered_snapshot.keys())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_deserializes_capture_format() {
        let raw = json!({
            "filteredSnapshot": {
                "todoList": {
                    "type": "RecoilState",
                    "contents": [{"id": 1, "text": "write tests"}],
                    "nodeDeps": [],
                    "nodeToNodeSubscriptions": ["todoStats"]
                },
                "todoStats": {
                    "type": "RecoilValueReadOnly",
                    "contents": {"total": 1},
                    "nodeDeps": ["todoList"],
                    "nodeToNodeSubscriptions": []
                }
            },
            "componentAtomTree": {
                "name": "App",
                "tag": 0,
                "recoilNodes": [],
                "children": [
                    {"name": "TodoList", "tag": 0, "recoilNodes": ["todoList"], "children": []}
                ]
            }
        });

        let snap: Snapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snap.filtered_snapshot.len(), 2);
        assert_eq!(snap.filtered_snapshot["todoList"].kind, NodeKind::Atom);
        assert_eq!(snap.filtered_snapshot["todoStats"].kind, NodeKind::Selector);
        assert_eq!(snap.filtered_snapshot["todoStats"].node_deps, vec!["todoList"]);
        assert_eq!(snap.component_atom_tree.component_count(), 2);
        assert_eq!(
            snap.component_atom_tree.children[0].recoil_nodes,
            vec!["todoList"]
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let snap: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snap.filtered_snapshot.is_empty());
        assert_eq!(snap.component_atom_tree.component_count(), 1);

        let node: Node = serde_json::from_str(r#"{"contents": 3}"#).unwrap();
        assert_eq!(node.kind, NodeKind::Atom);
        assert!(node.node_deps.is_empty());
    }

    #[test]
    fn test_node_names_are_sorted_and_unique() {
        let mut first = Snapshot::default();
        first.filtered_snapshot.insert("b".into(), Node::default());
        first.filtered_snapshot.insert("a".into(), Node::default());
        let mut second = Snapshot::default();
        second.filtered_snapshot.insert("c".into(), Node::default());
        second.filtered_snapshot.insert("a".into(), Node::default());

        assert_eq!(node_names(&[first, second]), vec!["a", "b", "c"]);
        assert!(node_names(&[]).is_empty());
    }
}
