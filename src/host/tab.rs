//! The closed set of views the host can display.

use std::fmt;

/// Active view selector.
///
/// The six views form a closed set, so the selector can never name a view
/// that the mapping does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    StateDiff,
    StateTree,
    ComponentGraph,
    AtomNetwork,
    StateGraph,
    Settings,
}

impl Tab {
    pub const COUNT: usize = 6;

    /// Every view in navigation-bar order.
    pub const ALL: [Tab; Tab::COUNT] = [
        Tab::StateDiff,
        Tab::StateTree,
        Tab::ComponentGraph,
        Tab::AtomNetwork,
        Tab::StateGraph,
        Tab::Settings,
    ];

    /// Display name, also the key of the view mapping.
    pub fn name(self) -> &'static str {
        match self {
            Tab::StateDiff => "State Diff",
            Tab::StateTree => "State Tree",
            Tab::ComponentGraph => "Component Graph",
            Tab::AtomNetwork => "Atom Network",
            Tab::StateGraph => "State Graph",
            Tab::Settings => "Settings",
        }
    }

    /// Position in navigation-bar order.
    pub fn index(self) -> usize {
        match self {
            Tab::StateDiff => 0,
            Tab::StateTree => 1,
            Tab::ComponentGraph => 2,
            Tab::AtomNetwork => 3,
            Tab::StateGraph => 4,
            Tab::Settings => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn names() -> [&'static str; Tab::COUNT] {
        Tab::ALL.map(Tab::name)
    }

    /// Next tab, wrapping after Settings.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::COUNT]
    }

    /// Previous tab, wrapping before State Diff.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::COUNT - 1) % Tab::COUNT]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_state_diff() {
        assert_eq!(Tab::default(), Tab::StateDiff);
        assert_eq!(Tab::default().name(), "State Diff");
    }

    #[test]
    fn test_names_in_navigation_order() {
        assert_eq!(
            Tab::names(),
            [
                "State Diff",
                "State Tree",
                "Component Graph",
                "Atom Network",
                "State Graph",
                "Settings"
            ]
        );
    }

    #[test]
    fn test_index_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(Tab::COUNT), None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Tab::Settings.next(), Tab::StateDiff);
        assert_eq!(Tab::StateDiff.prev(), Tab::Settings);
        assert_eq!(Tab::StateTree.next(), Tab::ComponentGraph);
    }
}
