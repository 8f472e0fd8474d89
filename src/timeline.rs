//! Snapshot history and the cursor selecting the pair under inspection.
//!
//! The timeline produces the `(previous, current)` pair handed to the view
//! host. It owns the history; everything downstream only borrows it.

use crate::models::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    history: Vec<Snapshot>,
    cur_render: usize,
}

impl Timeline {
    /// Create a timeline positioned on the newest snapshot.
    pub fn new(history: Vec<Snapshot>) -> Self {
        let cur_render = history.len().saturating_sub(1);
        Self {
            history,
            cur_render,
        }
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the current snapshot. Meaningless when the history is empty.
    pub fn cursor(&self) -> usize {
        self.cur_render
    }

    /// The snapshot being inspected, absent before any capture exists.
    pub fn current(&self) -> Option<&Snapshot> {
        self.history.get(self.cur_render)
    }

    /// The snapshot before the current one, absent at the first capture.
    pub fn previous(&self) -> Option<&Snapshot> {
        self.cur_render
            .checked_sub(1)
            .and_then(|idx| self.history.get(idx))
    }

    fn is_at_end(&self) -> bool {
        self.cur_render + 1 >= self.history.len()
    }

    /// Move to the previous snapshot. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.cur_render == 0 {
            return false;
        }
        self.cur_render -= 1;
        true
    }

    /// Move to the next snapshot. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cur_render += 1;
        true
    }

    pub fn jump_to_first(&mut self) {
        self.cur_render = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.cur_render = self.history.len().saturating_sub(1);
    }

    /// Swap in a freshly loaded history.
    ///
    /// A cursor parked on the newest snapshot follows the new newest one;
    /// any other cursor stays put, clamped to the new length.
    pub fn replace_history(&mut self, history: Vec<Snapshot>) {
        let follow = self.is_at_end();
        self.history = history;
        let last = self.history.len().saturating_sub(1);
        self.cur_render = if follow {
            last
        } else {
            self.cur_render.min(last)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    fn snap(value: i64) -> Snapshot {
        let mut snap = Snapshot::default();
        snap.filtered_snapshot.insert(
            "count".into(),
            Node {
                contents: value.into(),
                ..Node::default()
            },
        );
        snap
    }

    fn contents(snap: Option<&Snapshot>) -> Option<i64> {
        snap.and_then(|s| s.filtered_snapshot["count"].contents.as_i64())
    }

    #[test]
    fn test_empty_timeline_has_no_pair() {
        let timeline = Timeline::default();
        assert!(timeline.current().is_none());
        assert!(timeline.previous().is_none());
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_new_starts_at_newest() {
        let timeline = Timeline::new(vec![snap(1), snap(2), snap(3)]);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(contents(timeline.current()), Some(3));
        assert_eq!(contents(timeline.previous()), Some(2));
    }

    #[test]
    fn test_first_capture_has_no_previous() {
        let mut timeline = Timeline::new(vec![snap(1), snap(2)]);
        timeline.jump_to_first();
        assert_eq!(contents(timeline.current()), Some(1));
        assert!(timeline.previous().is_none());
    }

    #[test]
    fn test_stepping_stops_at_bounds() {
        let mut timeline = Timeline::new(vec![snap(1), snap(2)]);
        assert!(!timeline.step_forward());
        assert!(timeline.step_back());
        assert!(!timeline.step_back());
        assert_eq!(timeline.cursor(), 0);
        assert!(timeline.step_forward());
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn test_replace_history_follows_newest_when_at_end() {
        let mut timeline = Timeline::new(vec![snap(1), snap(2)]);
        timeline.replace_history(vec![snap(1), snap(2), snap(3)]);
        assert_eq!(contents(timeline.current()), Some(3));
    }

    #[test]
    fn test_replace_history_keeps_cursor_when_browsing() {
        let mut timeline = Timeline::new(vec![snap(1), snap(2), snap(3)]);
        timeline.jump_to_first();
        timeline.replace_history(vec![snap(1), snap(2), snap(3), snap(4)]);
        assert_eq!(timeline.cursor(), 0);

        timeline.step_forward();
        timeline.step_forward();
        timeline.replace_history(vec![snap(1)]);
        assert_eq!(timeline.cursor(), 0);
    }
}
