// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    config::SessionConfig,
    error::{Error, StateError},
    events::Event,
    state::{Phase, State},
};

const MINUTE_MS: u64 = 60_000;

/// The session lifecycle state machine.
///
/// Pure and synchronous: events come in with their own `now_ms`, actions go
/// out for the runtime to execute. The manager never reads a clock and never
/// performs I/O, so every timing property is testable with hand-picked
/// timestamps.
#[derive(Debug)]
pub struct Manager {
    cfg: SessionConfig,
}

impl Manager {
    pub fn new(cfg: SessionConfig) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.cfg
    }

    pub fn handle_event(&self, state: &mut State, event: Event) -> Result<Vec<Action>, Error> {
        let now_ms = event.now_ms();

        match event {
            Event::Tick { .. } => Ok(self.evaluate(state, now_ms)),

            Event::UserActivity { .. } => {
                if state.phase() == Phase::Expired {
                    // The signal source may fire once more mid-teardown.
                    return Ok(Vec::new());
                }

                let was_warning = state.phase() == Phase::Warning;
                state.touch_activity(now_ms);

                if was_warning {
                    // Forgiveness policy: any activity at all silently
                    // cancels the warning, no explicit extend required.
                    state.set_phase(Phase::Active);
                    return Ok(vec![Action::HideWarning]);
                }

                Ok(Vec::new())
            }

            Event::ExtendSession { .. } => {
                if state.phase() == Phase::Expired {
                    return Err(Error::InvalidState(StateError::SessionExpired));
                }

                state.reset_idle_period(now_ms);
                state.set_phase(Phase::Active);

                Ok(vec![Action::HideWarning, Action::RefreshCredential])
            }

            Event::LogoutRequested { .. } => {
                if state.phase() == Phase::Expired {
                    return Err(Error::InvalidState(StateError::SessionExpired));
                }

                Ok(Self::expire(state))
            }
        }
    }

    /// Periodic re-evaluation. Idempotent across ticks: without intervening
    /// activity it only recomputes a decreasing countdown.
    fn evaluate(&self, state: &mut State, now_ms: u64) -> Vec<Action> {
        if state.phase() == Phase::Expired {
            // Stray tick after expiry; the instance is done.
            return Vec::new();
        }

        let timeout_ms = self.cfg.timeout_ms();
        let elapsed_ms = state.elapsed_ms(now_ms);

        // A large jump (system sleep/wake) is a legitimate large elapsed
        // and may land here directly from Active.
        if elapsed_ms >= timeout_ms {
            return Self::expire(state);
        }

        // Round up so the countdown never shows 0 while time remains.
        let remaining_minutes = (timeout_ms - elapsed_ms).div_ceil(MINUTE_MS);

        if remaining_minutes <= self.cfg.warning_window_minutes() && !state.warning_shown() {
            state.set_warning_shown(true);
            state.set_phase(Phase::Warning);
            return vec![Action::ShowWarning { remaining_minutes }];
        }

        if state.phase() == Phase::Warning {
            return vec![Action::UpdateCountdown { remaining_minutes }];
        }

        Vec::new()
    }

    /// Terminal transition; the phase guard in the callers makes sure the
    /// teardown actions are emitted exactly once per instance.
    fn expire(state: &mut State) -> Vec<Action> {
        let was_warning = state.phase() == Phase::Warning;
        state.set_phase(Phase::Expired);

        let mut out = Vec::new();
        if was_warning {
            out.push(Action::HideWarning);
        }
        out.push(Action::ClearCredentials);
        out.push(Action::NavigateToLogin);
        out
    }
}
