//! Session store trait.

use async_trait::async_trait;

use super::SessionRecord;
use crate::ClientError;

/// Durable slot holding at most one session record.
///
/// Implementations provide different backends:
/// - [`InMemorySessionStore`](super::InMemorySessionStore): ephemeral, for tests
/// - [`FileSessionStore`](super::FileSessionStore): survives process restarts
///
/// Access is single-actor; last write wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Serializes and stores the record, fully replacing any previous one.
    async fn write(&self, record: &SessionRecord) -> Result<(), ClientError>;

    /// Returns the stored record, or `None` when the slot is empty.
    ///
    /// A blob that no longer deserializes also yields `None`; corruption is
    /// recovered locally, never surfaced to the user.
    async fn read(&self) -> Result<Option<SessionRecord>, ClientError>;

    /// Empties the slot.
    async fn clear(&self) -> Result<(), ClientError>;
}
