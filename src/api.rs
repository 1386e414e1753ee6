// Author: Dustin Pilgrim
// License: MIT

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::Deserialize;

/// Errors crossing the REST seam. The transport owns retry and auth-header
/// policy; an error that reaches us is terminal for that call.
pub type ApiError = Box<dyn std::error::Error + Send + Sync>;

/// Server-side view of the credential's lifetime. Advisory only: local
/// expiry is decided by the idle clock, never by this value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionExpiry {
    pub expires_at: DateTime<Utc>,
}

/// `GET /auth/check-session` response shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionStatus {
    pub valid: bool,
    pub expires_at: DateTime<Utc>,
}

/// Session endpoints of the dashboard REST API.
///
/// Implemented by the dashboard's HTTP client; this crate only consumes it.
pub trait SessionApi: Send + Sync + 'static {
    /// `POST /auth/extend-session`. Idempotent, no request body.
    fn extend(&self) -> BoxFuture<'static, Result<SessionExpiry, ApiError>>;

    /// `GET /auth/check-session`.
    fn check(&self) -> BoxFuture<'static, Result<SessionStatus, ApiError>>;
}
