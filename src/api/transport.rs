//! Transport seam between the pipeline and the wire.

use std::fmt;

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse};
use crate::session::Credential;

/// Failure to complete an HTTP exchange at all.
///
/// A response with an error status is not a `TransportError`; it comes back
/// as an [`ApiResponse`] and the pipeline decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Timeout,
    Network(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "request timed out"),
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Performs HTTP exchanges.
///
/// Implementations:
/// - [`HttpTransport`](super::HttpTransport): reqwest-backed
/// - [`MockTransport`](super::MockTransport): scripted, for tests
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one exchange.
    ///
    /// `credential` has already been resolved by the outbound stage;
    /// implementations attach it as a bearer `Authorization` header.
    async fn dispatch(
        &self,
        request: &ApiRequest,
        credential: Option<&Credential>,
    ) -> Result<ApiResponse, TransportError>;
}
