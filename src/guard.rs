//! Admission control for authenticated views.
//!
//! State machine: `Unknown → {Authenticated, Unauthenticated}`. While the
//! session manager is still initializing the guard stays `Unknown` and asks
//! for a neutral waiting indicator, never content. Once latched it only
//! moves on login/logout events; within one guarded-view mount it never
//! re-enters `Unknown`.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::api::Transport;
use crate::events::{Listener, SessionEvent};
use crate::session::{SessionManager, SessionStore};

/// What the guarded view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Session state not yet known; render the waiting indicator.
    Pending,
    /// Render the protected content.
    Admit,
    /// Send the user to the login entry point instead.
    RedirectToLogin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Gate in front of protected views.
///
/// Subscribe it to the event bus so login/logout recompute the decision:
///
/// ```rust,ignore
/// let guard = Arc::new(RouteGuard::new());
/// bus.listen(guard.clone());
/// match guard.evaluate(&manager) { ... }
/// ```
pub struct RouteGuard {
    state: Mutex<GuardState>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GuardState::Unknown),
        }
    }

    /// Decides admission for the current navigation attempt.
    ///
    /// The first call after initialization completes latches the state.
    pub fn evaluate<S: SessionStore, T: Transport>(
        &self,
        manager: &SessionManager<S, T>,
    ) -> Admission {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if *state == GuardState::Unknown {
            if manager.is_initializing() {
                return Admission::Pending;
            }
            *state = if manager.current_user().is_some() {
                GuardState::Authenticated
            } else {
                GuardState::Unauthenticated
            };
        }

        match *state {
            GuardState::Authenticated => Admission::Admit,
            GuardState::Unauthenticated | GuardState::Unknown => Admission::RedirectToLogin,
        }
    }

    fn transition(&self, next: GuardState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for Arc<RouteGuard> {
    async fn handle(&self, event: &SessionEvent) {
        let next = match event {
            SessionEvent::LoginSucceeded { .. } | SessionEvent::Registered { .. } => {
                GuardState::Authenticated
            }
            SessionEvent::LoggedOut { .. } => GuardState::Unauthenticated,
            SessionEvent::Rehydrated { principal, .. } => {
                if principal.is_some() {
                    GuardState::Authenticated
                } else {
                    GuardState::Unauthenticated
                }
            }
            SessionEvent::LoginFailed { .. } => return,
        };
        self.transition(next);
    }
}
