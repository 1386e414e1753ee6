// Author: Dustin Pilgrim
// License: MIT

//! Presentational contract for the expiry warning modal.
//!
//! The modal holds no state of its own: everything it shows derives from the
//! published [`SessionSnapshot`], and everything the user does maps to one
//! of two commands relayed back into the session runtime.

use crate::core::info::SessionSnapshot;

/// What the user did with the warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    Extend,
    Logout,

    /// Click on the backdrop. Uncertain intent ends the session; this is
    /// not a neutral dismissal.
    OutsideClick,
}

/// Command the modal relays back into the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Extend,
    Logout,
}

impl ModalChoice {
    pub fn command(self) -> ModalCommand {
        match self {
            ModalChoice::Extend => ModalCommand::Extend,
            ModalChoice::Logout | ModalChoice::OutsideClick => ModalCommand::Logout,
        }
    }
}

/// Render model for the warning.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub remaining_minutes: u64,

    /// Share of the warning window still left, clamped to [0, 1]. Drives
    /// the countdown bar.
    pub progress: f64,
}

impl ModalView {
    pub fn countdown_label(&self) -> String {
        if self.remaining_minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{} minutes", self.remaining_minutes)
        }
    }
}

/// Build the render model, or `None` while the warning is hidden.
///
/// `window_minutes` is the full countdown span
/// (`SessionConfig::warning_window_minutes`).
pub fn view(snapshot: &SessionSnapshot, window_minutes: u64) -> Option<ModalView> {
    if !snapshot.modal_open() {
        return None;
    }

    let remaining_minutes = snapshot.remaining_minutes?;
    let progress = if window_minutes == 0 {
        0.0
    } else {
        (remaining_minutes as f64 / window_minutes as f64).clamp(0.0, 1.0)
    };

    Some(ModalView {
        remaining_minutes,
        progress,
    })
}
