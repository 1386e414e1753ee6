// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration semantics failed.
    ///
    /// Examples:
    /// - zero timeout or zero check interval
    /// - warning window that never opens (warning >= timeout)
    InvalidConfig(ConfigError),

    /// A command was rejected because it is invalid in the current state.
    ///
    /// Examples:
    /// - extend after the session already expired
    /// - logout after the session already expired
    InvalidState(StateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `timeout_minutes` must be non-zero.
    ZeroTimeout,

    /// `check_interval_seconds` must be non-zero.
    ZeroCheckInterval,

    /// `warning_minutes` must come strictly before `timeout_minutes`.
    WarningNotBeforeTimeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    SessionExpired,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "{e}"),
            Error::InvalidState(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTimeout =>
                write!(f, "session timeout must be non-zero"),
            ConfigError::ZeroCheckInterval =>
                write!(f, "check interval must be non-zero"),
            ConfigError::WarningNotBeforeTimeout =>
                write!(f, "warning must come before the timeout"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::SessionExpired =>
                write!(f, "session already expired"),
        }
    }
}

impl std::error::Error for Error {}
