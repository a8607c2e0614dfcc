use chrono::{DateTime, Utc};

use crate::session::Principal;

/// Session lifecycle events published by the session manager.
///
/// Events carry the principal, never the credential.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The startup read of the persisted slot completed.
    ///
    /// `principal` is the adopted identity, if a well-formed record was found.
    Rehydrated {
        principal: Option<Principal>,
        at: DateTime<Utc>,
    },

    LoginSucceeded {
        principal: Principal,
        demo: bool,
        at: DateTime<Utc>,
    },
    LoginFailed {
        email: String,
        reason: String,
        at: DateTime<Utc>,
    },
    Registered {
        principal: Principal,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Returns a dot-separated event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rehydrated { .. } => "session.rehydrated",
            Self::LoginSucceeded { .. } => "session.login.success",
            Self::LoginFailed { .. } => "session.login.failed",
            Self::Registered { .. } => "session.register.success",
            Self::LoggedOut { .. } => "session.logout",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Rehydrated { at, .. }
            | Self::LoginSucceeded { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::Registered { at, .. }
            | Self::LoggedOut { at } => *at,
        }
    }
}
