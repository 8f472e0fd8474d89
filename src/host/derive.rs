//! Reduction of the snapshot pair to the data the views consume.

use crate::models::{ComponentAtomTree, FilteredSnapshot, Snapshot};

/// Borrowed views into the current and previous snapshots.
///
/// Recomputed on every render. Each field borrows the snapshot's own data;
/// nothing is copied or transformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedSnapshots<'a> {
    pub filtered_prev_snap: Option<&'a FilteredSnapshot>,
    pub filtered_cur_snap: Option<&'a FilteredSnapshot>,
    pub component_atom_tree: Option<&'a ComponentAtomTree>,
}

impl<'a> DerivedSnapshots<'a> {
    pub fn derive(previous: Option<&'a Snapshot>, current: Option<&'a Snapshot>) -> Self {
        Self {
            filtered_prev_snap: previous.map(|snap| &snap.filtered_snapshot),
            filtered_cur_snap: current.map(|snap| &snap.filtered_snapshot),
            component_atom_tree: current.map(|snap| &snap.component_atom_tree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;
    use std::ptr;

    fn snapshot(name: &str) -> Snapshot {
        let mut snap = Snapshot::default();
        snap.filtered_snapshot.insert(name.to_string(), Node::default());
        snap.component_atom_tree.name = format!("{}Root", name);
        snap
    }

    #[test]
    fn test_absent_current_clears_current_fields() {
        let prev = snapshot("prev");
        let derived = DerivedSnapshots::derive(Some(&prev), None);
        assert!(derived.filtered_cur_snap.is_none());
        assert!(derived.component_atom_tree.is_none());
        assert!(ptr::eq(
            derived.filtered_prev_snap.unwrap(),
            &prev.filtered_snapshot
        ));
    }

    #[test]
    fn test_fields_borrow_snapshot_data() {
        let prev = snapshot("prev");
        let cur = snapshot("cur");
        let derived = DerivedSnapshots::derive(Some(&prev), Some(&cur));
        assert!(ptr::eq(derived.filtered_cur_snap.unwrap(), &cur.filtered_snapshot));
        assert!(ptr::eq(
            derived.component_atom_tree.unwrap(),
            &cur.component_atom_tree
        ));
        assert!(ptr::eq(
            derived.filtered_prev_snap.unwrap(),
            &prev.filtered_snapshot
        ));
    }

    #[test]
    fn test_nothing_captured() {
        let derived = DerivedSnapshots::derive(None, None);
        assert!(derived.filtered_prev_snap.is_none());
        assert!(derived.filtered_cur_snap.is_none());
        assert!(derived.component_atom_tree.is_none());
    }
}
