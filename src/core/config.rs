// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use serde::Deserialize;

use crate::core::error::{ConfigError, Error};

const MINUTE_MS: u64 = 60_000;

/// Session lifecycle tuning.
///
/// Provided by the embedding client (which owns config files, env, etc.);
/// this crate only validates and consumes it. With the 30/25 defaults the
/// countdown warning appears after 25 idle minutes and runs for 5.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Total idle time before the session expires.
    pub timeout_minutes: u64,

    /// Idle minutes after which the warning becomes eligible; the visible
    /// countdown covers the remaining `timeout_minutes - warning_minutes`.
    pub warning_minutes: u64,

    /// Polling granularity of the idle clock. Bounds warning precision to
    /// within one tick.
    pub check_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: 30,
            warning_minutes: 25,
            check_interval_seconds: 60,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.timeout_minutes == 0 {
            return Err(Error::InvalidConfig(ConfigError::ZeroTimeout));
        }
        if self.check_interval_seconds == 0 {
            return Err(Error::InvalidConfig(ConfigError::ZeroCheckInterval));
        }
        if self.warning_minutes >= self.timeout_minutes {
            return Err(Error::InvalidConfig(ConfigError::WarningNotBeforeTimeout));
        }
        Ok(())
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_minutes.saturating_mul(MINUTE_MS)
    }

    /// Countdown starts once the remaining whole minutes drop to this value.
    pub fn warning_window_minutes(&self) -> u64 {
        self.timeout_minutes.saturating_sub(self.warning_minutes)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_seconds)
    }
}
