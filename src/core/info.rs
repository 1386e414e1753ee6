// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

use crate::core::state::Phase;

/// Snapshot published to the presentation layer after every handled event.
///
/// This is the stable contract the dashboard shell renders from; see
/// `modal::view` for the expiry-warning render model built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,

    /// Countdown shown by the expiry modal; `None` while the warning is
    /// hidden.
    pub remaining_minutes: Option<u64>,
}

impl SessionSnapshot {
    pub fn initial() -> Self {
        Self {
            phase: Phase::Active,
            remaining_minutes: None,
        }
    }

    /// The modal is open exactly while the session is in its warning phase.
    pub fn modal_open(&self) -> bool {
        self.phase == Phase::Warning
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
