// Author: Dustin Pilgrim
// License: MIT

//! Session lifecycle management for the Vigil monitoring dashboard client.
//!
//! The pipeline: raw UI interactions become normalized activity pulses, a
//! polled idle clock measures the quiet span since the last pulse, a warning
//! with a countdown goes up as expiry approaches, and the session either
//! gets extended or is forcibly ended. The state machine in [`core`] is pure
//! and deterministic; [`runtime`] wires it to tokio, the idle clock, and the
//! collaborator seams ([`api`], [`auth`], the injected UI event stream).
//!
//! The manager is a local idle heuristic, not a security boundary: the
//! server stays free to reject the credential whenever it likes.

pub mod api;
pub mod auth;
pub mod core;
pub mod log;
pub mod modal;
pub mod runtime;
pub mod services;

pub use crate::api::{ApiError, SessionApi, SessionExpiry, SessionStatus};
pub use crate::auth::{Credential, CredentialStore, Navigator, UserProfile};
pub use crate::core::config::SessionConfig;
pub use crate::core::error::Error;
pub use crate::core::info::SessionSnapshot;
pub use crate::core::state::Phase;
pub use crate::modal::{ModalChoice, ModalCommand, ModalView};
pub use crate::runtime::{Collaborators, SessionHandle, SessionRuntime};
pub use crate::services::activity::{ActivityCallback, InputKind, Subscription, UiEventStream};
