// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Opaque bearer credential. Never parsed or validated locally; the manager
/// is an idle heuristic, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential(pub String);

/// Minimal profile record kept alongside the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Durable credential + profile storage owned by the embedding client.
pub trait CredentialStore: Send + Sync + 'static {
    fn credential(&self) -> Option<Credential>;

    fn profile(&self) -> Option<UserProfile>;

    fn store(&self, credential: Credential, profile: UserProfile);

    /// Logout: both records go together.
    fn clear(&self);
}

/// Route control back to the unauthenticated entry point.
pub trait Navigator: Send + Sync + 'static {
    fn to_login(&self);
}
