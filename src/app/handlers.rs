//! Input handling for the App.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use super::{apply_selection, App};

impl App {
    /// Handle one terminal event. Marks the app dirty when anything changed.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => self.mark_dirty(),
            _ => {}
        }
    }

    /// Global keys first; everything else goes to the view host.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('[') => {
                let moved = self.timeline.step_back();
                self.after_timeline_move(moved);
            }
            KeyCode::Char(']') => {
                let moved = self.timeline.step_forward();
                self.after_timeline_move(moved);
            }
            KeyCode::Home => {
                let moved = self.timeline.cursor() != 0;
                self.timeline.jump_to_first();
                self.after_timeline_move(moved);
            }
            KeyCode::End => {
                let moved = self.timeline.cursor() + 1 < self.timeline.len();
                self.timeline.jump_to_last();
                self.after_timeline_move(moved);
            }
            KeyCode::Char('r') => {
                self.reload();
            }
            _ => {
                let App {
                    timeline,
                    selected,
                    host,
                    ..
                } = self;
                let handled = host.handle_key(key, timeline.history(), &mut |update| {
                    apply_selection(selected, update)
                });
                if handled {
                    self.mark_dirty();
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let layout = self.last_layout;
        if self.host.handle_mouse(mouse, layout.nav, layout.body) {
            self.mark_dirty();
        }
    }
}
