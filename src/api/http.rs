//! reqwest-backed transport.

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{Transport, TransportError};
use super::{ApiRequest, ApiResponse, Method, RequestBody};
use crate::config::ClientConfig;
use crate::session::Credential;
use crate::ClientError;

/// Sends requests over HTTP with the configured base URL and deadline.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.resource.path())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(
        &self,
        request: &ApiRequest,
        credential: Option<&Credential>,
    ) -> Result<ApiResponse, TransportError> {
        let url = self.url(request);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Multipart(upload) => {
                let mut form = reqwest::multipart::Form::new().part(
                    "file",
                    reqwest::multipart::Part::bytes(upload.bytes.clone())
                        .file_name(upload.file_name.clone()),
                );
                for (key, value) in &upload.fields {
                    form = form.text(key.clone(), value.clone());
                }
                builder.multipart(form)
            }
        };

        if let Some(credential) = credential {
            builder = builder.bearer_auth(credential.expose());
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();

        // Empty and non-JSON bodies decode to null
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}

fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(error.to_string())
    }
}
