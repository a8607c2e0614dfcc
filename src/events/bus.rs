use std::sync::{Arc, RwLock};

use super::{Listener, SessionEvent};

/// Owned event distribution.
///
/// The bus is injected into whatever publishes or observes session changes.
/// Cloning is cheap and shares the listener set, so the same bus can be
/// handed to the session manager and every subscriber.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Arc<RwLock<Vec<Arc<dyn Listener>>>>,
}

impl EventBus {
    /// Creates a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener to receive events.
    ///
    /// Listeners are called in the order they are registered.
    pub fn listen(&self, listener: impl Listener) {
        self.listen_arc(Arc::new(listener));
    }

    /// Register an already-shared listener.
    pub fn listen_arc(&self, listener: Arc<dyn Listener>) {
        match self.listeners.write() {
            Ok(mut listeners) => listeners.push(listener),
            Err(_) => log::warn!(target: "satchel::events", "listener registry poisoned"),
        }
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|l| l.len()).unwrap_or(0)
    }

    /// Dispatch an event to all registered listeners.
    ///
    /// If no listeners are registered, this is a no-op.
    pub async fn dispatch(&self, event: SessionEvent) {
        let listeners: Vec<Arc<dyn Listener>> = match self.listeners.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                log::warn!(target: "satchel::events", "listener registry poisoned");
                return;
            }
        };

        for listener in &listeners {
            listener.handle(&event).await;
        }
    }
}
