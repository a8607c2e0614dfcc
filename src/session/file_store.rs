//! File-backed session slot.
//!
//! The whole session record is stored as one JSON file. A fresh login
//! replaces the file, logout deletes it.

use std::path::PathBuf;

use async_trait::async_trait;

use super::store::SessionStore;
use super::SessionRecord;
use crate::ClientError;

/// Stores the session record at a fixed path.
///
/// # Example
///
/// ```rust,ignore
/// use satchel::FileSessionStore;
///
/// let store = FileSessionStore::new("/var/lib/myapp/session.json")?;
/// ```
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the given file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::Storage(format!("Failed to create session directory: {e}"))
            })?;
        }
        Ok(Self { path })
    }

    /// Returns the path of the slot file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn write(&self, record: &SessionRecord) -> Result<(), ClientError> {
        let content = serde_json::to_string_pretty(record)
            .map_err(|e| ClientError::Storage(format!("Failed to serialize session: {e}")))?;

        std::fs::write(&self.path, content)
            .map_err(|e| ClientError::Storage(format!("Failed to write session file: {e}")))?;

        Ok(())
    }

    async fn read(&self) -> Result<Option<SessionRecord>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ClientError::Storage(format!("Failed to read session file: {e}")))?;

        match serde_json::from_str(&content) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                // Corrupt slot: treat as logged out rather than raising
                log::warn!(
                    target: "satchel::session",
                    "discarding unreadable session slot: {error}"
                );
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| ClientError::Storage(format!("Failed to delete session file: {e}")))?;
        }

        Ok(())
    }
}
