use async_trait::async_trait;

use crate::events::{Listener, SessionEvent};

/// Logs all session events using the `log` crate.
///
/// # Example
///
/// ```rust,ignore
/// use satchel::events::EventBus;
/// use satchel::events::listeners::LoggingListener;
///
/// let bus = EventBus::new();
/// bus.listen(LoggingListener::new());
/// ```
pub struct LoggingListener {
    level: log::Level,
}

impl LoggingListener {
    /// Creates a new logging listener at INFO level.
    pub fn new() -> Self {
        Self {
            level: log::Level::Info,
        }
    }

    /// Creates a new logging listener at the specified level.
    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for LoggingListener {
    async fn handle(&self, event: &SessionEvent) {
        log::log!(
            target: "satchel::events",
            self.level,
            "event={} {:?}",
            event.name(),
            event
        );
    }
}
