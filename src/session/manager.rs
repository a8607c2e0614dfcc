//! Session manager: the single owner of "who is logged in".
//!
//! All session-mutating operations go through here. Every successful
//! operation writes through to the session store, publishes a typed event on
//! the bus, and emits a transient notice. User actions trigger mutations one
//! at a time, so no locking discipline is needed beyond last-write-wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;

use super::{Principal, SessionRecord, SessionStore};
use crate::api::{ApiClient, Transport};
use crate::events::{EventBus, SessionEvent};
use crate::notify::{Notice, Notifier};
use crate::services::auth::AuthApi;
use crate::validators::{validate_display_name, validate_email, ValidationError};
use crate::ClientError;

/// Substituted when the login form leaves the password blank.
const DEFAULT_PASSWORD: &str = "password";

/// Which variant performs authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Build sessions locally with the demo-sentinel credential. No backend
    /// is contacted; every credential pair is accepted.
    #[default]
    Demo,
    /// Authenticate against the remote backend and adopt the credential it
    /// issues.
    Remote,
}

/// Owns the in-memory session state and mediates every mutation.
///
/// Construct one per process, call [`initialize`](Self::initialize) at
/// startup, and hand clones of the bus to whatever needs to observe session
/// changes.
pub struct SessionManager<S: SessionStore, T: Transport> {
    store: Arc<S>,
    client: Arc<ApiClient<S, T>>,
    bus: EventBus,
    notifier: Arc<dyn Notifier>,
    mode: AuthMode,
    current: RwLock<Option<SessionRecord>>,
    initializing: AtomicBool,
}

impl<S: SessionStore, T: Transport> SessionManager<S, T> {
    pub fn new(
        store: Arc<S>,
        client: Arc<ApiClient<S, T>>,
        bus: EventBus,
        notifier: Arc<dyn Notifier>,
        mode: AuthMode,
    ) -> Self {
        Self {
            store,
            client,
            bus,
            notifier,
            mode,
            current: RwLock::new(None),
            initializing: AtomicBool::new(true),
        }
    }

    /// The logged-in principal, if any.
    pub fn current_user(&self) -> Option<Principal> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|record| record.principal.clone())
    }

    /// The full session record, if any.
    pub fn session(&self) -> Option<SessionRecord> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True until the startup read of the persisted slot completes.
    ///
    /// Lets dependents distinguish "not logged in" from "not yet known".
    pub fn is_initializing(&self) -> bool {
        self.initializing.load(Ordering::SeqCst)
    }

    /// Startup rehydration: adopt the persisted record if it is well-formed,
    /// discard it silently otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "session_initialize", skip_all)
    )]
    pub async fn initialize(&self) {
        let adopted = match self.store.read().await {
            Ok(Some(record)) if record.is_well_formed() => Some(record),
            Ok(Some(_)) => {
                log::warn!(
                    target: "satchel::session",
                    "discarding incomplete persisted session"
                );
                let _ = self.store.clear().await;
                None
            }
            Ok(None) => None,
            Err(error) => {
                log::warn!(target: "satchel::session", "session slot unreadable: {error}");
                None
            }
        };

        let principal = adopted.as_ref().map(|record| record.principal.clone());
        self.set_current(adopted);
        self.initializing.store(false, Ordering::SeqCst);

        self.bus
            .dispatch(SessionEvent::Rehydrated {
                principal,
                at: Utc::now(),
            })
            .await;
    }

    /// Logs in with an email and password.
    ///
    /// Any password is accepted; an empty one is substituted with a default,
    /// not rejected. An empty email is a validation failure.
    ///
    /// # Errors
    ///
    /// Notifies, then re-raises, so callers chain a follow-up navigation
    /// only on success. The session is left unset on failure.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal, ClientError> {
        let attempt = self.authenticate(email, password).await;
        match self.adopt(attempt).await {
            Ok((principal, demo)) => {
                self.notifier.notify(Notice::success("Logged in successfully"));
                self.bus
                    .dispatch(SessionEvent::LoginSucceeded {
                        principal: principal.clone(),
                        demo,
                        at: Utc::now(),
                    })
                    .await;
                Ok(principal)
            }
            Err(error) => {
                self.notifier.notify(Notice::error("Login failed"));
                self.bus
                    .dispatch(SessionEvent::LoginFailed {
                        email: email.to_owned(),
                        reason: error.to_string(),
                        at: Utc::now(),
                    })
                    .await;
                Err(error)
            }
        }
    }

    /// Registers a new account. The display name is taken verbatim.
    ///
    /// # Errors
    ///
    /// Same contract as [`login`](Self::login).
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "register", skip_all, err))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Principal, ClientError> {
        let attempt = self.enroll(name, email, password).await;
        match self.adopt(attempt).await {
            Ok((principal, _)) => {
                self.notifier
                    .notify(Notice::success("Registered successfully"));
                self.bus
                    .dispatch(SessionEvent::Registered {
                        principal: principal.clone(),
                        at: Utc::now(),
                    })
                    .await;
                Ok(principal)
            }
            Err(error) => {
                self.notifier.notify(Notice::error("Registration failed"));
                self.bus
                    .dispatch(SessionEvent::LoginFailed {
                        email: email.to_owned(),
                        reason: error.to_string(),
                        at: Utc::now(),
                    })
                    .await;
                Err(error)
            }
        }
    }

    /// Logs in as the fixed, well-known demo principal. No credential entry.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "quick_login", skip_all))]
    pub async fn quick_login(&self) -> Result<Principal, ClientError> {
        let record = SessionRecord::demo(demo_principal());
        let (principal, demo) = self.adopt(Ok(record)).await?;

        self.notifier.notify(Notice::success("Logged in successfully"));
        self.bus
            .dispatch(SessionEvent::LoginSucceeded {
                principal: principal.clone(),
                demo,
                at: Utc::now(),
            })
            .await;
        Ok(principal)
    }

    /// Clears the session unconditionally.
    ///
    /// The backend is notified best-effort first; its outcome never blocks
    /// or fails the local logout.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all))]
    pub async fn logout(&self) {
        if self.session().is_some() {
            if let Err(error) = AuthApi::new(self.client.clone()).logout().await {
                log::debug!(
                    target: "satchel::session",
                    "logout notification failed: {error}"
                );
            }
        }

        if let Err(error) = self.store.clear().await {
            log::warn!(
                target: "satchel::session",
                "failed to clear session slot: {error}"
            );
        }
        self.set_current(None);

        self.notifier
            .notify(Notice::success("Logged out successfully"));
        self.bus
            .dispatch(SessionEvent::LoggedOut { at: Utc::now() })
            .await;
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionRecord, ClientError> {
        if email.is_empty() {
            return Err(ValidationError::EmailEmpty.into());
        }
        let password = if password.is_empty() {
            DEFAULT_PASSWORD
        } else {
            password
        };

        match self.mode {
            AuthMode::Demo => Ok(SessionRecord::demo(principal_from_email(email))),
            AuthMode::Remote => {
                let response = AuthApi::new(self.client.clone())
                    .login(email, password)
                    .await?;
                Ok(response.into_record())
            }
        }
    }

    async fn enroll(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionRecord, ClientError> {
        validate_display_name(name)?;
        validate_email(email)?;
        let password = if password.is_empty() {
            DEFAULT_PASSWORD
        } else {
            password
        };

        match self.mode {
            AuthMode::Demo => Ok(SessionRecord::demo(Principal {
                id: "1".to_owned(),
                display_name: name.to_owned(),
                email: email.to_owned(),
            })),
            AuthMode::Remote => {
                let response = AuthApi::new(self.client.clone())
                    .register(name, email, password)
                    .await?;
                Ok(response.into_record())
            }
        }
    }

    /// Persists and publishes a freshly-built record.
    async fn adopt(
        &self,
        attempt: Result<SessionRecord, ClientError>,
    ) -> Result<(Principal, bool), ClientError> {
        let record = attempt?;
        let principal = record.principal.clone();
        let demo = record.is_demo();

        self.store.write(&record).await?;
        self.set_current(Some(record));

        Ok((principal, demo))
    }

    fn set_current(&self, value: Option<SessionRecord>) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// The mock-variant principal: identity derived from the email local part.
fn principal_from_email(email: &str) -> Principal {
    let local = email.split('@').next().unwrap_or(email);
    Principal {
        id: "1".to_owned(),
        display_name: local.to_owned(),
        email: email.to_owned(),
    }
}

/// The fixed principal behind quick login.
fn demo_principal() -> Principal {
    Principal {
        id: "demo123".to_owned(),
        display_name: "Demo User".to_owned(),
        email: "demo@example.com".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{MockTransport, TransportError};
    use crate::notify::MockNotifier;
    use crate::session::InMemorySessionStore;

    fn manager(
        mode: AuthMode,
        transport: MockTransport,
    ) -> (
        SessionManager<InMemorySessionStore, MockTransport>,
        Arc<InMemorySessionStore>,
        MockNotifier,
    ) {
        let store = Arc::new(InMemorySessionStore::new());
        let client = Arc::new(ApiClient::new(store.clone(), transport));
        let notifier = MockNotifier::new();
        let manager = SessionManager::new(
            store.clone(),
            client,
            EventBus::new(),
            Arc::new(notifier.clone()),
            mode,
        );
        (manager, store, notifier)
    }

    #[tokio::test]
    async fn test_login_derives_principal_from_local_part() {
        let (manager, store, _) = manager(AuthMode::Demo, MockTransport::new());
        manager.initialize().await;

        let principal = manager.login("alice@example.com", "").await.unwrap();
        assert_eq!(principal.display_name, "alice");
        assert_eq!(principal.email, "alice@example.com");

        let stored = store.read().await.unwrap().unwrap();
        assert!(stored.is_demo());
    }

    #[tokio::test]
    async fn test_login_rejects_empty_email() {
        let (manager, store, notifier) = manager(AuthMode::Demo, MockTransport::new());
        manager.initialize().await;

        let result = manager.login("", "password").await;
        assert_eq!(
            result,
            Err(ClientError::Validation(ValidationError::EmailEmpty))
        );
        assert_eq!(store.read().await.unwrap(), None);
        assert_eq!(manager.current_user(), None);
        assert!(notifier.saw(crate::notify::NoticeLevel::Error, "Login failed"));
    }

    #[tokio::test]
    async fn test_register_uses_name_verbatim() {
        let (manager, _, _) = manager(AuthMode::Demo, MockTransport::new());
        manager.initialize().await;

        let principal = manager
            .register("Alice Liddell", "alice@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(principal.display_name, "Alice Liddell");
    }

    #[tokio::test]
    async fn test_quick_login_fixed_principal() {
        let (manager, _, _) = manager(AuthMode::Demo, MockTransport::new());
        manager.initialize().await;

        // regardless of prior state
        manager.login("someone@example.com", "pw").await.unwrap();
        let principal = manager.quick_login().await.unwrap();

        assert_eq!(principal.id, "demo123");
        assert_eq!(principal.display_name, "Demo User");
        assert_eq!(principal.email, "demo@example.com");
        assert!(manager.session().unwrap().is_demo());
    }

    #[tokio::test]
    async fn test_initialize_adopts_well_formed_record() {
        let (manager, store, _) = manager(AuthMode::Demo, MockTransport::new());
        store
            .write(&SessionRecord::demo(demo_principal()))
            .await
            .unwrap();

        assert!(manager.is_initializing());
        manager.initialize().await;

        assert!(!manager.is_initializing());
        assert_eq!(manager.current_user().unwrap().id, "demo123");
    }

    #[tokio::test]
    async fn test_initialize_discards_incomplete_record() {
        let (manager, store, _) = manager(AuthMode::Demo, MockTransport::new());
        let mut record = SessionRecord::demo(demo_principal());
        record.principal.id.clear();
        store.write(&record).await.unwrap();

        manager.initialize().await;

        assert_eq!(manager.current_user(), None);
        assert_eq!(store.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_remote_fails() {
        let transport = MockTransport::new();
        transport.respond_with(
            200,
            json!({
                "access_token": "issued_token",
                "token_type": "bearer",
                "user": {"_id": "u1", "name": "Alice", "email": "alice@example.com"}
            }),
        );
        // the best-effort logout notification dies on the wire
        transport.push(Err(TransportError::Timeout));

        let (manager, store, notifier) = manager(AuthMode::Remote, transport);
        manager.initialize().await;

        manager.login("alice@example.com", "pw").await.unwrap();
        assert!(store.read().await.unwrap().is_some());

        manager.logout().await;

        assert_eq!(store.read().await.unwrap(), None);
        assert_eq!(manager.current_user(), None);
        assert!(notifier.saw(
            crate::notify::NoticeLevel::Success,
            "Logged out successfully"
        ));
    }

    #[tokio::test]
    async fn test_remote_login_failure_leaves_session_unset() {
        let transport = MockTransport::new();
        transport.respond_with(401, json!({"detail": "Incorrect email or password"}));

        let (manager, store, notifier) = manager(AuthMode::Remote, transport);
        manager.initialize().await;

        let result = manager.login("alice@example.com", "wrong").await;
        assert_eq!(result, Err(ClientError::Unauthorized));
        assert_eq!(store.read().await.unwrap(), None);
        assert_eq!(manager.current_user(), None);
        assert!(notifier.saw(crate::notify::NoticeLevel::Error, "Login failed"));
    }
}
