//! Session state: who is logged in, persisted across restarts.

mod credential;
mod file_store;
mod manager;
mod memory_store;
mod store;

pub use credential::{Credential, CredentialKind, DEMO_CREDENTIAL};
pub use file_store::FileSessionStore;
pub use manager::{AuthMode, SessionManager};
pub use memory_store::InMemorySessionStore;
pub use store::SessionStore;

use serde::{Deserialize, Serialize};

/// The authenticated user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// One session: a credential plus the principal it was issued to.
///
/// At most one record exists per device; a new login fully replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub credential: Credential,
    pub credential_kind: CredentialKind,
    pub principal: Principal,
}

impl SessionRecord {
    /// Builds a record around a backend-issued credential.
    pub fn new(credential: Credential, principal: Principal) -> Self {
        Self {
            credential,
            credential_kind: CredentialKind::Bearer,
            principal,
        }
    }

    /// Builds a demo record carrying the sentinel credential.
    pub fn demo(principal: Principal) -> Self {
        Self::new(Credential::demo(), principal)
    }

    /// True when this session never authenticated against the backend.
    pub fn is_demo(&self) -> bool {
        self.credential.is_demo()
    }

    /// A record is adopted at startup only when every field is populated.
    pub fn is_well_formed(&self) -> bool {
        !self.credential.is_empty()
            && !self.principal.id.is_empty()
            && !self.principal.display_name.is_empty()
            && !self.principal.email.is_empty()
    }
}
