use serde_json::Value;

use super::{Method, Resource};

/// A file destined for a multipart upload, plus its accompanying form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub fields: Vec<(String, String)>,
}

/// Payload of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Form(Vec<(String, String)>),
    Multipart(FileUpload),
}

/// One outgoing call, before the pipeline decorates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub resource: Resource,
    pub method: Method,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(resource: Resource) -> Self {
        Self {
            resource,
            method: Method::Get,
            body: RequestBody::Empty,
        }
    }

    pub fn post(resource: Resource, body: Value) -> Self {
        Self {
            resource,
            method: Method::Post,
            body: RequestBody::Json(body),
        }
    }

    pub fn post_form(resource: Resource, fields: Vec<(String, String)>) -> Self {
        Self {
            resource,
            method: Method::Post,
            body: RequestBody::Form(fields),
        }
    }

    pub fn post_multipart(resource: Resource, upload: FileUpload) -> Self {
        Self {
            resource,
            method: Method::Post,
            body: RequestBody::Multipart(upload),
        }
    }

    pub fn put(resource: Resource, body: Value) -> Self {
        Self {
            resource,
            method: Method::Put,
            body: RequestBody::Json(body),
        }
    }

    pub fn delete(resource: Resource) -> Self {
        Self {
            resource,
            method: Method::Delete,
            body: RequestBody::Empty,
        }
    }
}

/// Status and decoded JSON body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// A synthesized 200 response.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
