// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use crate::core::action::Action;
use crate::{vdebug, vinfo, vwarn};

use super::SessionRuntime;

impl SessionRuntime {
    pub(super) fn exec_action(&mut self, action: Action) {
        match action {
            Action::ShowWarning { remaining_minutes } => {
                vinfo!("Session", "expiry warning up ({} min left)", remaining_minutes);
                self.countdown = Some(remaining_minutes);
            }

            Action::UpdateCountdown { remaining_minutes } => {
                self.countdown = Some(remaining_minutes);
            }

            Action::HideWarning => {
                self.countdown = None;
            }

            Action::RefreshCredential => self.refresh_credential(),

            Action::ClearCredentials => {
                vinfo!("Session", "clearing stored credentials");
                self.credentials.clear();
            }

            Action::NavigateToLogin => self.navigator.to_login(),
        }
    }

    /// Best-effort server refresh. Detached on purpose: by the time the
    /// reply lands, newer activity or ticks may have moved local state, and
    /// local state always wins. The task only logs.
    fn refresh_credential(&self) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            match api.extend().await {
                Ok(expiry) => {
                    vdebug!("Session", "server extended the session until {}", expiry.expires_at);
                }
                Err(e) => {
                    vwarn!(
                        "Session",
                        "extend-session failed (local extension stands): {}",
                        e
                    );
                }
            }
        });
    }
}
