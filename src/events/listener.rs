use async_trait::async_trait;

use super::SessionEvent;

/// Trait for handling session events asynchronously.
///
/// Listeners can perform any async operation: logging, metrics, refreshing
/// cached UI state, etc.
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Handle a session event.
    ///
    /// Called for every event dispatched. Filter by matching on the event
    /// variant to handle specific events.
    async fn handle(&self, event: &SessionEvent);
}
