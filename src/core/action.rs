// Author: Dustin Pilgrim
// License: MIT

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Surface the expiry warning with its initial countdown value.
    ShowWarning {
        remaining_minutes: u64,
    },

    /// Refresh the countdown while the warning stays visible.
    UpdateCountdown {
        remaining_minutes: u64,
    },

    /// Take the warning down.
    HideWarning,

    /// Refresh the server-side credential. Fire-and-forget; the reply is
    /// advisory and never feeds back into local state.
    RefreshCredential,

    /// Drop the stored bearer credential and user profile together.
    ClearCredentials,

    /// Return control to the unauthenticated entry route.
    NavigateToLogin,
}
