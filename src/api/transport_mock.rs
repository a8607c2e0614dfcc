#![allow(clippy::unwrap_used)]

//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::transport::{Transport, TransportError};
use super::{ApiRequest, ApiResponse, Method, RequestBody, Resource};
use crate::session::Credential;

/// What the pipeline handed to the transport for one exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub resource: Resource,
    pub method: Method,
    pub body: RequestBody,
    /// The raw bearer token, if one was attached.
    pub credential: Option<String>,
}

/// Records every exchange and replays scripted outcomes.
///
/// With no script, every exchange succeeds with `200 {}`. Use
/// [`failing`](MockTransport::failing) for a transport where every exchange
/// dies on the wire, or [`push`](MockTransport::push) to queue outcomes that
/// are consumed in order.
#[derive(Clone, Default)]
pub struct MockTransport {
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    outcomes: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
    fail_all: Option<TransportError>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport where every exchange fails at the network layer.
    pub fn failing() -> Self {
        Self {
            fail_all: Some(TransportError::Network("connection refused".to_owned())),
            ..Self::default()
        }
    }

    /// Queues the outcome for the next unscripted exchange.
    pub fn push(&self, outcome: Result<ApiResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Queues a response with the given status and body.
    pub fn respond_with(&self, status: u16, body: serde_json::Value) {
        self.push(Ok(ApiResponse { status, body }));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn dispatch(
        &self,
        request: &ApiRequest,
        credential: Option<&Credential>,
    ) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            resource: request.resource.clone(),
            method: request.method,
            body: request.body.clone(),
            credential: credential.map(|c| c.expose().to_owned()),
        });

        if let Some(outcome) = self.outcomes.lock().unwrap().pop_front() {
            return outcome;
        }

        match &self.fail_all {
            Some(error) => Err(error.clone()),
            None => Ok(ApiResponse::ok(json!({}))),
        }
    }
}
