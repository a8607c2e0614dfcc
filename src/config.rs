//! Client configuration.
//!
//! # Example
//!
//! ```rust
//! use satchel::ClientConfig;
//! use std::time::Duration;
//!
//! // Use defaults
//! let config = ClientConfig::default();
//!
//! // Or point at a different backend
//! let config = ClientConfig::new("https://api.example.com/api")
//!     .with_timeout(Duration::from_secs(60));
//! ```

use std::time::Duration;

/// Base URL of the backend API during local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to.
    pub base_url: String,

    /// Per-request deadline enforced by the transport.
    ///
    /// Default is 30 seconds; speech generation is slow.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Overrides the per-request deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_config() {
        let config =
            ClientConfig::new("https://api.example.com/api").with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "https://api.example.com/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
