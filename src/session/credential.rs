//! Bearer credential wrapper.
//!
//! The credential is the only sensitive value the client holds, so it gets a
//! dedicated type whose `Debug` and `Display` render `[REDACTED]`. Serde
//! passes the raw value through; the persisted session slot needs it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reserved sentinel credential marking a demo session.
///
/// A session carrying this value never authenticated against the backend:
/// the pipeline withholds it from outgoing requests and fabricates responses
/// when those requests fail.
pub const DEMO_CREDENTIAL: &str = "demo_token_12345";

/// An opaque bearer token.
///
/// # Example
///
/// ```rust
/// use satchel::Credential;
///
/// let credential = Credential::new("abc123");
/// assert_eq!(format!("{credential:?}"), "Credential([REDACTED])");
/// assert_eq!(credential.expose(), "abc123");
/// assert!(!credential.is_demo());
/// assert!(Credential::demo().is_demo());
/// ```
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token issued by the backend.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the demo-sentinel credential.
    #[must_use]
    pub fn demo() -> Self {
        Self(DEMO_CREDENTIAL.to_owned())
    }

    /// True when this credential is the demo sentinel.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.0 == DEMO_CREDENTIAL
    }

    /// Exposes the raw token, e.g. to build an `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Credential {}

impl Serialize for Credential {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The raw token is required when the record is persisted
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Credential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Credential(token))
    }
}

/// Classification tag stored next to the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    #[default]
    Bearer,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "bearer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacted() {
        let credential = Credential::new("secret_token");
        assert_eq!(format!("{credential:?}"), "Credential([REDACTED])");
        assert_eq!(format!("{credential}"), "[REDACTED]");
    }

    #[test]
    fn test_demo_sentinel() {
        assert!(Credential::demo().is_demo());
        assert_eq!(Credential::demo().expose(), DEMO_CREDENTIAL);
        assert!(!Credential::new("real_token").is_demo());
    }

    #[test]
    fn test_serde_roundtrip() {
        let credential = Credential::new("abc123");
        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, "\"abc123\"");

        let restored: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, credential);
    }

    #[test]
    fn test_credential_kind_serde() {
        let json = serde_json::to_string(&CredentialKind::Bearer).unwrap();
        assert_eq!(json, "\"bearer\"");

        let kind: CredentialKind = serde_json::from_str("\"bearer\"").unwrap();
        assert_eq!(kind, CredentialKind::Bearer);
        assert_eq!(kind.as_str(), "bearer");
    }
}
