//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Alternate screen plus mouse capture, for tab clicks, drag-to-pan and the
/// scroll wheel.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter_tui_mode`] and raw mode. Safe to call more than once; errors
/// are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for panic paths.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
