// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::core::config::SessionConfig;
use crate::core::error::{Error, StateError};
use crate::core::events::Event;
use crate::core::manager::Manager;
use crate::core::state::{Phase, State};

const MIN: u64 = 60_000;

fn cfg(timeout: u64, warning: u64) -> SessionConfig {
    SessionConfig {
        timeout_minutes: timeout,
        warning_minutes: warning,
        check_interval_seconds: 60,
    }
}

fn mgr() -> Manager {
    Manager::new(SessionConfig::default()).unwrap()
}

fn tick_at(mgr: &Manager, state: &mut State, now_ms: u64) -> Vec<Action> {
    mgr.handle_event(state, Event::Tick { now_ms }).unwrap()
}

fn tick_minute(mgr: &Manager, state: &mut State, minute: u64) -> Vec<Action> {
    tick_at(mgr, state, minute * MIN)
}

#[test]
fn stays_active_through_early_ticks() {
    let mgr = mgr();
    let mut state = State::new(0);

    for minute in 1..=24 {
        let actions = tick_minute(&mgr, &mut state, minute);
        assert!(actions.is_empty(), "unexpected actions at minute {minute}");
    }

    assert_eq!(state.phase(), Phase::Active);
}

#[test]
fn warning_fires_at_the_boundary() {
    let mgr = mgr();
    let mut state = State::new(0);

    let actions = tick_minute(&mgr, &mut state, 25);
    assert_eq!(
        actions,
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );
    assert_eq!(state.phase(), Phase::Warning);
    assert!(state.warning_shown());
}

#[test]
fn warning_entry_side_effects_fire_once() {
    let mgr = mgr();
    let mut state = State::new(0);

    let actions = tick_minute(&mgr, &mut state, 25);
    assert_eq!(
        actions,
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );

    // Later ticks keep the countdown moving, nothing re-enters.
    for (minute, left) in [(26, 4), (27, 3), (28, 2), (29, 1)] {
        let actions = tick_minute(&mgr, &mut state, minute);
        assert_eq!(
            actions,
            vec![Action::UpdateCountdown {
                remaining_minutes: left
            }],
            "wrong countdown at minute {minute}"
        );
    }
}

#[test]
fn countdown_is_non_increasing_without_activity() {
    let mgr = mgr();
    let mut state = State::new(0);

    let mut last = u64::MAX;
    for minute in 25..30 {
        let actions = tick_minute(&mgr, &mut state, minute);
        let left = match actions.as_slice() {
            [Action::ShowWarning { remaining_minutes }]
            | [Action::UpdateCountdown { remaining_minutes }] => *remaining_minutes,
            other => panic!("unexpected actions {other:?}"),
        };
        assert!(left <= last);
        last = left;
    }
}

#[test]
fn countdown_never_shows_zero_while_time_remains() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = tick_minute(&mgr, &mut state, 25);

    // 30 seconds short of the deadline still reads as one minute.
    let actions = tick_at(&mgr, &mut state, 29 * MIN + 30_000);
    assert_eq!(
        actions,
        vec![Action::UpdateCountdown {
            remaining_minutes: 1
        }]
    );
    assert_eq!(state.phase(), Phase::Warning);
}

#[test]
fn remaining_minutes_round_up() {
    let mgr = mgr();
    let mut state = State::new(0);

    // One second past the boundary: 4m59s left still displays 5.
    let actions = tick_at(&mgr, &mut state, 25 * MIN + 1_000);
    assert_eq!(
        actions,
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );
}

#[test]
fn expiry_invokes_logout_exactly_once() {
    let mgr = mgr();
    let mut state = State::new(0);

    let mut cleared = 0;
    let mut navigated = 0;

    for minute in 1..=35 {
        for action in tick_minute(&mgr, &mut state, minute) {
            match action {
                Action::ClearCredentials => cleared += 1,
                Action::NavigateToLogin => navigated += 1,
                _ => {}
            }
        }
    }

    assert_eq!(state.phase(), Phase::Expired);
    assert_eq!(cleared, 1);
    assert_eq!(navigated, 1);
}

#[test]
fn thirty_minute_scenario() {
    let mgr = mgr();
    let mut state = State::new(0);

    // Six idle minutes: nothing.
    for minute in 1..=6 {
        assert!(tick_minute(&mgr, &mut state, minute).is_empty());
    }
    assert_eq!(state.phase(), Phase::Active);

    // Minute 25: warning with a five minute countdown.
    for minute in 7..=24 {
        assert!(tick_minute(&mgr, &mut state, minute).is_empty());
    }
    assert_eq!(
        tick_minute(&mgr, &mut state, 25),
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );

    // Minute 30: expired, modal down, credentials gone.
    for minute in 26..=29 {
        let _ = tick_minute(&mgr, &mut state, minute);
    }
    assert_eq!(
        tick_minute(&mgr, &mut state, 30),
        vec![
            Action::HideWarning,
            Action::ClearCredentials,
            Action::NavigateToLogin,
        ]
    );
    assert_eq!(state.phase(), Phase::Expired);

    // Stray tick after expiry is a no-op.
    assert!(tick_minute(&mgr, &mut state, 31).is_empty());
}

#[test]
fn activity_resets_the_idle_period() {
    let mgr = mgr();
    let mut state = State::new(0);

    let actions = mgr
        .handle_event(&mut state, Event::UserActivity { now_ms: 10 * MIN })
        .unwrap();
    assert!(actions.is_empty());

    // 24 minutes after the pulse: still quiet.
    assert!(tick_minute(&mgr, &mut state, 34).is_empty());

    // 25 minutes after the pulse: warning.
    assert_eq!(
        tick_minute(&mgr, &mut state, 35),
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );
}

#[test]
fn activity_during_warning_dismisses_without_extend() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = tick_minute(&mgr, &mut state, 25);
    assert_eq!(state.phase(), Phase::Warning);

    let actions = mgr
        .handle_event(&mut state, Event::UserActivity { now_ms: 26 * MIN })
        .unwrap();
    assert_eq!(actions, vec![Action::HideWarning]);
    assert_eq!(state.phase(), Phase::Active);
    assert!(!state.warning_shown());

    // Countdown restarts from the pulse, not from the old warning.
    assert!(tick_minute(&mgr, &mut state, 27).is_empty());
    assert!(tick_minute(&mgr, &mut state, 50).is_empty());
    assert_eq!(
        tick_minute(&mgr, &mut state, 51),
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );
}

#[test]
fn extend_resets_clock_and_refreshes_credential() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = tick_minute(&mgr, &mut state, 25);
    assert_eq!(state.phase(), Phase::Warning);

    let actions = mgr
        .handle_event(&mut state, Event::ExtendSession { now_ms: 26 * MIN })
        .unwrap();
    assert_eq!(
        actions,
        vec![Action::HideWarning, Action::RefreshCredential]
    );
    assert_eq!(state.phase(), Phase::Active);
    assert_eq!(state.last_activity_ms(), 26 * MIN);

    // Full window again: quiet until minute 26 + 25.
    assert!(tick_minute(&mgr, &mut state, 50).is_empty());
    assert_eq!(
        tick_minute(&mgr, &mut state, 51),
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );
}

#[test]
fn extend_while_active_still_refreshes() {
    let mgr = mgr();
    let mut state = State::new(0);

    let actions = mgr
        .handle_event(&mut state, Event::ExtendSession { now_ms: 5 * MIN })
        .unwrap();
    assert_eq!(
        actions,
        vec![Action::HideWarning, Action::RefreshCredential]
    );
    assert_eq!(state.phase(), Phase::Active);
}

#[test]
fn logout_request_tears_the_session_down() {
    let mgr = mgr();
    let mut state = State::new(0);

    let actions = mgr
        .handle_event(&mut state, Event::LogoutRequested { now_ms: 10 * MIN })
        .unwrap();
    assert_eq!(
        actions,
        vec![Action::ClearCredentials, Action::NavigateToLogin]
    );
    assert_eq!(state.phase(), Phase::Expired);
}

#[test]
fn logout_from_warning_hides_the_modal() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = tick_minute(&mgr, &mut state, 25);

    let actions = mgr
        .handle_event(&mut state, Event::LogoutRequested { now_ms: 26 * MIN })
        .unwrap();
    assert_eq!(
        actions,
        vec![
            Action::HideWarning,
            Action::ClearCredentials,
            Action::NavigateToLogin,
        ]
    );
}

#[test]
fn commands_after_expiry_are_rejected() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = tick_minute(&mgr, &mut state, 30);
    assert_eq!(state.phase(), Phase::Expired);

    assert_eq!(
        mgr.handle_event(&mut state, Event::ExtendSession { now_ms: 31 * MIN }),
        Err(Error::InvalidState(StateError::SessionExpired))
    );
    assert_eq!(
        mgr.handle_event(&mut state, Event::LogoutRequested { now_ms: 31 * MIN }),
        Err(Error::InvalidState(StateError::SessionExpired))
    );

    // Ticks and late activity pulses stay silent no-ops.
    assert!(tick_minute(&mgr, &mut state, 32).is_empty());
    let actions = mgr
        .handle_event(&mut state, Event::UserActivity { now_ms: 32 * MIN })
        .unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.phase(), Phase::Expired);
}

#[test]
fn clock_jump_expires_on_next_tick() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = mgr
        .handle_event(&mut state, Event::UserActivity { now_ms: MIN })
        .unwrap();

    // Suspend/resume: three hours pass between ticks. Straight to expired,
    // without passing through the warning.
    let actions = tick_at(&mgr, &mut state, 180 * MIN);
    assert_eq!(
        actions,
        vec![Action::ClearCredentials, Action::NavigateToLogin]
    );
    assert_eq!(state.phase(), Phase::Expired);
}

#[test]
fn stale_activity_never_moves_the_clock_backward() {
    let mgr = mgr();
    let mut state = State::new(0);

    let _ = mgr
        .handle_event(&mut state, Event::UserActivity { now_ms: 20 * MIN })
        .unwrap();
    // Out-of-order pulse with an older timestamp.
    let _ = mgr
        .handle_event(&mut state, Event::UserActivity { now_ms: 10 * MIN })
        .unwrap();
    assert_eq!(state.last_activity_ms(), 20 * MIN);

    // Idle period still counts from minute 20.
    assert!(tick_minute(&mgr, &mut state, 44).is_empty());
    assert_eq!(
        tick_minute(&mgr, &mut state, 45),
        vec![Action::ShowWarning {
            remaining_minutes: 5
        }]
    );
}

#[test]
fn custom_window_respects_config() {
    let mgr = Manager::new(cfg(10, 7)).unwrap();
    let mut state = State::new(0);

    // Window of three minutes: quiet until minute 7.
    for minute in 1..=6 {
        assert!(tick_minute(&mgr, &mut state, minute).is_empty());
    }
    assert_eq!(
        tick_minute(&mgr, &mut state, 7),
        vec![Action::ShowWarning {
            remaining_minutes: 3
        }]
    );
    assert_eq!(
        tick_minute(&mgr, &mut state, 10),
        vec![
            Action::HideWarning,
            Action::ClearCredentials,
            Action::NavigateToLogin,
        ]
    );
}

#[test]
fn rejects_invalid_config() {
    assert!(matches!(
        Manager::new(cfg(0, 0)),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        Manager::new(cfg(10, 10)),
        Err(Error::InvalidConfig(_))
    ));
}
