//! The fixed name → view mapping composed every render.

use ratatui::text::Line;

use super::{CaptureSettings, DerivedSnapshots, HostInput, Tab, ZoomState};
use crate::ui::views::{
    AtomNetworkView, ComponentGraphView, DiffView, SettingsView, StateGraphView, TreeView,
};

/// One constructed view, carrying exactly its own input bundle.
pub enum ViewInstance<'a> {
    StateDiff(DiffView<'a>),
    StateTree(TreeView<'a>),
    ComponentGraph(ComponentGraphView<'a>),
    AtomNetwork(AtomNetworkView<'a>),
    StateGraph(StateGraphView<'a>),
    Settings(SettingsView<'a>),
}

impl ViewInstance<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            ViewInstance::StateDiff(_) => Tab::StateDiff,
            ViewInstance::StateTree(_) => Tab::StateTree,
            ViewInstance::ComponentGraph(_) => Tab::ComponentGraph,
            ViewInstance::AtomNetwork(_) => Tab::AtomNetwork,
            ViewInstance::StateGraph(_) => Tab::StateGraph,
            ViewInstance::Settings(_) => Tab::Settings,
        }
    }

    /// Lines laid out when the view was constructed.
    pub fn lines(&self) -> &[Line<'static>] {
        match self {
            ViewInstance::StateDiff(view) => view.lines(),
            ViewInstance::StateTree(view) => view.lines(),
            ViewInstance::ComponentGraph(view) => view.lines(),
            ViewInstance::AtomNetwork(view) => view.lines(),
            ViewInstance::StateGraph(view) => view.lines(),
            ViewInstance::Settings(view) => view.lines(),
        }
    }
}

/// All six views, in tab order.
pub struct ViewMapping<'a> {
    views: [ViewInstance<'a>; Tab::COUNT],
}

impl<'a> ViewMapping<'a> {
    /// Build every view from the render input and the host-owned state.
    ///
    /// Hidden views are constructed too, so each one's layout work runs on
    /// every render.
    pub fn compose(
        input: &HostInput<'a>,
        zoom: ZoomState,
        capture: &'a CaptureSettings,
        settings_cursor: usize,
    ) -> Self {
        let derived = DerivedSnapshots::derive(input.previous_snapshot, input.current_snapshot);

        let views = Tab::ALL.map(|tab| {
            let view = match tab {
                Tab::StateDiff => ViewInstance::StateDiff(DiffView::new(
                    derived.filtered_prev_snap,
                    derived.filtered_cur_snap,
                )),
                Tab::StateTree => ViewInstance::StateTree(TreeView::new(derived.filtered_cur_snap)),
                Tab::ComponentGraph => ViewInstance::ComponentGraph(ComponentGraphView::new(
                    derived.component_atom_tree,
                    derived.filtered_cur_snap,
                    zoom,
                )),
                Tab::AtomNetwork => {
                    ViewInstance::AtomNetwork(AtomNetworkView::new(derived.filtered_cur_snap))
                }
                Tab::StateGraph => {
                    ViewInstance::StateGraph(StateGraphView::new(derived.filtered_cur_snap))
                }
                Tab::Settings => ViewInstance::Settings(SettingsView::new(
                    input.snapshot_history,
                    input.selected,
                    capture.persist_enabled,
                    &capture.throttle_rate,
                    settings_cursor,
                )),
            };
            tracing::trace!(tab = %tab, lines = view.lines().len(), "view constructed");
            view
        });

        Self { views }
    }

    pub fn get(&self, tab: Tab) -> &ViewInstance<'a> {
        &self.views[tab.index()]
    }

    /// Tab names in display order.
    pub fn names(&self) -> [&'static str; Tab::COUNT] {
        Tab::names()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewInstance<'a>> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
