//! Remote auth endpoints, used by the wired session variant.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::api::{ApiClient, ApiRequest, Resource, Transport};
use crate::session::{Credential, Principal, SessionRecord, SessionStore};
use crate::ClientError;

/// Identity payload returned by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Shape of a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: RemoteUser,
}

impl AuthResponse {
    /// Builds the session record the manager adopts.
    pub fn into_record(self) -> SessionRecord {
        SessionRecord::new(
            Credential::new(self.access_token),
            Principal {
                id: self.user.id,
                display_name: self.user.name,
                email: self.user.email,
            },
        )
    }
}

/// Client for `/auth`.
pub struct AuthApi<S: SessionStore, T: Transport> {
    client: Arc<ApiClient<S, T>>,
}

impl<S: SessionStore, T: Transport> AuthApi<S, T> {
    pub fn new(client: Arc<ApiClient<S, T>>) -> Self {
        Self { client }
    }

    /// `POST /auth/login`, form-encoded per the OAuth2 password flow.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let request = ApiRequest::post_form(
            Resource::AuthLogin,
            vec![
                ("username".to_owned(), email.to_owned()),
                ("password".to_owned(), password.to_owned()),
            ],
        );
        let response = self.client.send(request).await?;
        serde_json::from_value(response.body).map_err(Into::into)
    }

    /// `POST /auth/register`, JSON body.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let request = ApiRequest::post(
            Resource::AuthRegister,
            json!({"name": name, "email": email, "password": password}),
        );
        let response = self.client.send(request).await?;
        serde_json::from_value(response.body).map_err(Into::into)
    }

    /// `POST /auth/logout`. The response is ignored by callers.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.client
            .send(ApiRequest::post(Resource::AuthLogout, json!({})))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{Method, MockTransport, RequestBody};
    use crate::session::InMemorySessionStore;

    fn api(transport: MockTransport) -> AuthApi<InMemorySessionStore, MockTransport> {
        let store = Arc::new(InMemorySessionStore::new());
        AuthApi::new(Arc::new(ApiClient::new(store, transport)))
    }

    #[tokio::test]
    async fn test_login_is_form_encoded() {
        let transport = MockTransport::new();
        transport.respond_with(
            200,
            json!({
                "access_token": "issued_token",
                "token_type": "bearer",
                "user": {"_id": "u1", "name": "Alice", "email": "alice@example.com"}
            }),
        );

        let response = api(transport.clone())
            .login("alice@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(response.access_token, "issued_token");
        assert_eq!(response.user.name, "Alice");

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.resource, Resource::AuthLogin);
        assert_eq!(recorded.method, Method::Post);
        assert_eq!(
            recorded.body,
            RequestBody::Form(vec![
                ("username".to_owned(), "alice@example.com".to_owned()),
                ("password".to_owned(), "pw".to_owned()),
            ])
        );
    }

    #[tokio::test]
    async fn test_into_record() {
        let response = AuthResponse {
            access_token: "issued_token".to_owned(),
            token_type: "bearer".to_owned(),
            user: RemoteUser {
                id: "u1".to_owned(),
                name: "Alice".to_owned(),
                email: "alice@example.com".to_owned(),
            },
        };

        let record = response.into_record();
        assert!(!record.is_demo());
        assert!(record.is_well_formed());
        assert_eq!(record.principal.display_name, "Alice");
    }

    #[tokio::test]
    async fn test_register_sends_json_body() {
        let transport = MockTransport::new();
        transport.respond_with(
            201,
            json!({
                "access_token": "issued_token",
                "token_type": "bearer",
                "user": {"_id": "u2", "name": "Bob", "email": "bob@example.com"}
            }),
        );

        api(transport.clone())
            .register("Bob", "bob@example.com", "pw")
            .await
            .unwrap();

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.resource, Resource::AuthRegister);
        assert_eq!(
            recorded.body,
            RequestBody::Json(json!({
                "name": "Bob",
                "email": "bob@example.com",
                "password": "pw"
            }))
        );
    }
}
