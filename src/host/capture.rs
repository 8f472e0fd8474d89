//! Capture settings exposed through the settings view.

/// Persist toggle and throttle value for the capturing side.
///
/// `throttle_rate` is kept exactly as typed; interpreting it is the capturing
/// side's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSettings {
    pub persist_enabled: bool,
    pub throttle_rate: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            persist_enabled: false,
            throttle_rate: "70".to_string(),
        }
    }
}
