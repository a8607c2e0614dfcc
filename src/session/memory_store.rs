//! In-memory session slot.
//!
//! Suitable for tests and ephemeral sessions.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::store::SessionStore;
use super::SessionRecord;
use crate::ClientError;

/// Holds the session record in memory.
///
/// # Note
///
/// The session is lost when the process exits. For durable storage use
/// [`FileSessionStore`](super::FileSessionStore).
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<RwLock<Option<SessionRecord>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no session is stored.
    pub fn is_empty(&self) -> bool {
        self.slot.read().map(|guard| guard.is_none()).unwrap_or(true)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn write(&self, record: &SessionRecord) -> Result<(), ClientError> {
        *self
            .slot
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))? = Some(record.clone());

        Ok(())
    }

    async fn read(&self) -> Result<Option<SessionRecord>, ClientError> {
        Ok(self
            .slot
            .read()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?
            .clone())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        *self
            .slot
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))? = None;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Credential, Principal};

    fn test_record(email: &str) -> SessionRecord {
        SessionRecord::new(
            Credential::new("issued_token"),
            Principal {
                id: "1".to_owned(),
                display_name: "Test User".to_owned(),
                email: email.to_owned(),
            },
        )
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrips() {
        let store = InMemorySessionStore::new();
        assert!(store.is_empty());

        let record = test_record("test@example.com");
        store.write(&record).await.unwrap();

        assert_eq!(store.read().await.unwrap(), Some(record));
        assert!(!store.is_empty());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_record() {
        let store = InMemorySessionStore::new();

        store.write(&test_record("first@example.com")).await.unwrap();
        store.write(&test_record("second@example.com")).await.unwrap();

        let found = store.read().await.unwrap().unwrap();
        assert_eq!(found.principal.email, "second@example.com");
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemorySessionStore::new();

        store.write(&test_record("test@example.com")).await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.read().await.unwrap(), None);
        assert!(store.is_empty());
    }
}
