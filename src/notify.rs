//! Transient user-facing notifications.
//!
//! The session manager and API services emit fire-and-forget notices that a
//! UI layer typically renders as toasts. Nothing in the core depends on
//! delivery.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Notification surface.
///
/// Implementations must not block; delivery is best-effort.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Routes notices to the log. The default surface in headless contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => {
                log::info!(target: "satchel::notify", "{}", notice.message);
            }
            NoticeLevel::Error => {
                log::warn!(target: "satchel::notify", "{}", notice.message);
            }
        }
    }
}

/// Records notices for assertions in tests.
#[derive(Clone, Default)]
pub struct MockNotifier {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages in order.
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|notices| notices.iter().map(|n| n.message.clone()).collect())
            .unwrap_or_default()
    }

    /// True if a notice at `level` containing `fragment` was recorded.
    pub fn saw(&self, level: NoticeLevel, fragment: &str) -> bool {
        self.notices
            .lock()
            .map(|notices| {
                notices
                    .iter()
                    .any(|n| n.level == level && n.message.contains(fragment))
            })
            .unwrap_or(false)
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
