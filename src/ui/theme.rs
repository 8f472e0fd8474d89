//! Color theme constants for the snaplens UI.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Border color for view panes
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the active tab and focused rows
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error text in the status line
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// State Nodes
// ============================================================================

/// Writable nodes
pub const COLOR_ATOM: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Derived nodes
pub const COLOR_SELECTOR: Color = Color::Rgb(4, 181, 117); // green #04B575

// ============================================================================
// Diff
// ============================================================================

pub const COLOR_ADDED: Color = Color::LightGreen;
pub const COLOR_REMOVED: Color = Color::LightRed;
pub const COLOR_CHANGED: Color = Color::Yellow;
