//! Shared fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{atom, snapshot_with};
//!
//! let snap = snapshot_with(&[("count", atom(1))]);
//! ```

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use snaplens::models::{ComponentAtomTree, Node, NodeKind, Snapshot};

pub fn atom(contents: impl Into<Value>) -> Node {
    Node {
        kind: NodeKind::Atom,
        contents: contents.into(),
        ..Node::default()
    }
}

pub fn selector(contents: impl Into<Value>, deps: &[&str]) -> Node {
    Node {
        kind: NodeKind::Selector,
        contents: contents.into(),
        node_deps: deps.iter().map(|d| d.to_string()).collect(),
        ..Node::default()
    }
}

/// A snapshot holding `nodes` and a one-component tree subscribed to all of them.
pub fn snapshot_with(nodes: &[(&str, Node)]) -> Snapshot {
    let mut snap = Snapshot::default();
    for (name, node) in nodes {
        snap.filtered_snapshot.insert(name.to_string(), node.clone());
    }
    snap.component_atom_tree = ComponentAtomTree {
        name: "root".into(),
        tag: 3,
        children: vec![ComponentAtomTree {
            name: "App".into(),
            tag: 0,
            recoil_nodes: nodes.iter().map(|(n, _)| n.to_string()).collect(),
            actual_duration: Some(2.5),
            ..ComponentAtomTree::default()
        }],
        ..ComponentAtomTree::default()
    };
    snap
}

/// Capture-format JSON for a counter at `count`.
pub fn counter_json(count: i64) -> Value {
    json!({
        "filteredSnapshot": {
            "count": {"type": "RecoilState", "contents": count, "nodeToNodeSubscriptions": ["double"]},
            "double": {"type": "RecoilValueReadOnly", "contents": count * 2, "nodeDeps": ["count"]}
        },
        "componentAtomTree": {
            "name": "root",
            "tag": 3,
            "children": [{"name": "Counter", "tag": 0, "recoilNodes": ["count", "double"], "children": []}]
        }
    })
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Buffer contents, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
