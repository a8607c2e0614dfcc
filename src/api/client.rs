//! The request pipeline.
//!
//! Two stages wrap every outgoing call: credential attachment on the way
//! out, demo-mode recovery on the way back. A demo session never leaks its
//! sentinel credential to the backend, and never observes a failed call.

use std::sync::Arc;

use serde_json::Value;

use super::demo;
use super::transport::{Transport, TransportError};
use super::{ApiRequest, ApiResponse};
use crate::session::{SessionRecord, SessionStore};
use crate::ClientError;

/// Decorates outgoing calls with the stored session.
///
/// The store is shared with the session manager; the pipeline re-reads it on
/// every call, so a login or logout takes effect immediately.
pub struct ApiClient<S: SessionStore, T: Transport> {
    store: Arc<S>,
    transport: T,
}

enum CallFailure {
    Status(ApiResponse),
    Wire(TransportError),
}

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    pub fn new(store: Arc<S>, transport: T) -> Self {
        Self { store, transport }
    }

    /// Sends one request through both pipeline stages.
    ///
    /// # Errors
    ///
    /// For a non-demo session, a failed exchange propagates as
    /// [`ClientError::Unauthorized`], [`ClientError::Api`] or
    /// [`ClientError::Transport`]. For a demo session the error path is
    /// fully recovered and this returns the fabricated response.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let credential = match self.current_session().await {
            Some(record) if record.is_demo() => {
                // Intentional: the sentinel must never reach a real backend
                log::debug!(
                    target: "satchel::api",
                    "demo session active, credential withheld from {} {}",
                    request.method,
                    request.resource.path()
                );
                None
            }
            Some(record) => Some(record.credential),
            None => None,
        };

        match self.transport.dispatch(&request, credential.as_ref()).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => self.recover(&request, CallFailure::Status(response)).await,
            Err(error) => self.recover(&request, CallFailure::Wire(error)).await,
        }
    }

    async fn current_session(&self) -> Option<SessionRecord> {
        match self.store.read().await {
            Ok(session) => session,
            Err(error) => {
                log::warn!(target: "satchel::api", "session slot unreadable: {error}");
                None
            }
        }
    }

    /// Error path of the inbound stage.
    async fn recover(
        &self,
        request: &ApiRequest,
        failure: CallFailure,
    ) -> Result<ApiResponse, ClientError> {
        // Re-read: the session may have changed while the call was in flight
        let session = self.current_session().await;
        if session.as_ref().is_some_and(SessionRecord::is_demo) {
            log::debug!(
                target: "satchel::api",
                "demo session active, fabricating {} {}",
                request.method,
                request.resource.path()
            );
            return Ok(ApiResponse::ok(demo::fabricate(
                &request.resource,
                request.method,
                &request.body,
            )));
        }

        match failure {
            CallFailure::Status(response) if response.status == 401 => {
                // Log-only policy: a 401 never clears the session or forces
                // a redirect
                log::warn!(
                    target: "satchel::api",
                    "unauthorized response from {}",
                    request.resource.path()
                );
                Err(ClientError::Unauthorized)
            }
            CallFailure::Status(response) => Err(ClientError::Api {
                status: response.status,
                message: error_message(&response),
            }),
            CallFailure::Wire(error) => Err(ClientError::Transport(error.to_string())),
        }
    }
}

fn error_message(response: &ApiResponse) -> String {
    response
        .body
        .get("detail")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| format!("request failed with status {}", response.status))
}
