//! Panic hook that gives the terminal back before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install once, before [`TerminalManager::new`](super::TerminalManager::new).
/// Chains to the previously installed hook (color-eyre's, in the binary).
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "panicked");
        original_hook(panic_info);
    }));
}
