//! Snapshot data types and loading.

mod load;
mod snapshot;

pub use load::{load_history, parse_history};
pub use snapshot::{
    node_names, ComponentAtomTree, FilteredSnapshot, Node, NodeKind, SelectedEntry, Snapshot,
};
