//! The outgoing request pipeline.
//!
//! Every call names a typed [`Resource`] and [`Method`]. The pipeline
//! attaches the bearer credential on the way out (unless the session is a
//! demo session) and, when a call fails under a demo session, synthesizes a
//! successful response instead of propagating the error.

mod client;
mod demo;
mod http;
mod request;
mod resource;
mod transport;
mod transport_mock;

pub use client::ApiClient;
pub use http::HttpTransport;
pub use request::{ApiRequest, ApiResponse, FileUpload, RequestBody};
pub use resource::{Method, Resource};
pub use transport::{Transport, TransportError};
pub use transport_mock::{MockTransport, RecordedRequest};
