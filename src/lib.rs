pub mod api;
pub mod config;
pub mod events;
pub mod guard;
pub mod notify;
pub mod services;
pub mod session;
pub mod validators;

pub use api::{
    ApiClient, ApiRequest, ApiResponse, FileUpload, HttpTransport, Method, MockTransport,
    RequestBody, Resource, Transport, TransportError,
};
pub use config::ClientConfig;
pub use guard::{Admission, RouteGuard};
pub use notify::{LogNotifier, MockNotifier, Notice, NoticeLevel, Notifier};
pub use session::{
    AuthMode, Credential, CredentialKind, FileSessionStore, InMemorySessionStore, Principal,
    SessionManager, SessionRecord, SessionStore, DEMO_CREDENTIAL,
};

use std::fmt;

use validators::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    Validation(ValidationError),
    Unauthorized,
    Api { status: u16, message: String },
    Transport(String),
    Storage(String),
    Serialization(String),
}

impl std::error::Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(err) => write!(f, "{err}"),
            ClientError::Unauthorized => write!(f, "Unauthorized"),
            ClientError::Api { status, message } => write!(f, "API error ({status}): {message}"),
            ClientError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ClientError::Storage(msg) => write!(f, "Storage error: {msg}"),
            ClientError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}
