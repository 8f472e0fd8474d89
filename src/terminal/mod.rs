//! Terminal state management with RAII cleanup.
//!
//! ```no_run
//! use snaplens::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> snaplens::error::SnaplensResult<()> {
//!     setup_panic_hook();
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! } // restored here
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::SnaplensResult;

/// Restores the terminal when dropped. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the session.
///
/// Created after logging and the panic hook; dropping it puts the terminal
/// back the way it was found.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Raw mode, alternate screen, mouse capture, then a cleared screen.
    pub fn new() -> SnaplensResult<Self> {
        enable_raw_mode()?;
        // Created before anything else can fail so raw mode is undone.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("terminal entered TUI mode");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore now instead of on drop.
    pub fn restore(&mut self) -> SnaplensResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}
