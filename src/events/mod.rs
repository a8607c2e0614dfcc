//! Typed session-change events.
//!
//! The session manager publishes an event for every state transition. The
//! route guard and any custom listeners subscribe through an [`EventBus`]
//! handed to them explicitly; there is no global registry. With no listeners
//! registered, a dispatch is a no-op.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use satchel::events::EventBus;
//! use satchel::events::listeners::LoggingListener;
//!
//! let bus = EventBus::new();
//! bus.listen(LoggingListener::new());
//!
//! // hand `bus` to the session manager; events will now be logged
//! ```
//!
//! # Custom Listeners
//!
//! Implement the [`Listener`] trait to create custom event handlers:
//!
//! ```rust,ignore
//! use satchel::events::{Listener, SessionEvent};
//! use async_trait::async_trait;
//!
//! struct MetricsListener;
//!
//! #[async_trait]
//! impl Listener for MetricsListener {
//!     async fn handle(&self, event: &SessionEvent) {
//!         if let SessionEvent::LoginFailed { .. } = event {
//!             // increment login failure counter
//!         }
//!     }
//! }
//! ```

mod bus;
mod event;
mod listener;

pub mod listeners;

pub use bus::EventBus;
pub use event::SessionEvent;
pub use listener::Listener;
