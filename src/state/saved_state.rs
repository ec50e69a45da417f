//! State exported when the screen is torn down and rebuilt

use serde::{Deserialize, Serialize};

/// Snapshot carried across a screen rebuild
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub remaining_millis: u64,
    pub is_paused: bool,
    pub is_running: bool,
    pub display_text: String,
}

impl SavedState {
    /// Whether restoring this snapshot should resume ticking
    pub fn should_resume(&self) -> bool {
        self.is_running && self.remaining_millis > 0
    }
}
