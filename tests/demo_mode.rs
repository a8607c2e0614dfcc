//! Demo-mode pipeline behavior: credential withholding, failure recovery
//! and the log-only 401 policy, exercised through the public services.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use satchel::api::{ApiClient, ApiRequest, MockTransport, Resource};
use satchel::notify::MockNotifier;
use satchel::services::{NewPodcast, NoteService, PodcastService};
use satchel::{ClientError, Credential, InMemorySessionStore, Principal, SessionRecord, SessionStore};
use serde_json::json;

type TestClient = ApiClient<InMemorySessionStore, MockTransport>;

fn principal() -> Principal {
    Principal {
        id: "demo123".to_owned(),
        display_name: "Demo User".to_owned(),
        email: "demo@example.com".to_owned(),
    }
}

async fn client_with(
    session: Option<SessionRecord>,
    transport: MockTransport,
) -> (Arc<TestClient>, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    if let Some(record) = session {
        store.write(&record).await.unwrap();
    }
    (Arc::new(ApiClient::new(store.clone(), transport)), store)
}

#[tokio::test]
async fn demo_sessions_never_leak_the_sentinel_credential() {
    let transport = MockTransport::new();
    let (client, _) = client_with(Some(SessionRecord::demo(principal())), transport.clone()).await;

    client.send(ApiRequest::get(Resource::Podcasts)).await.unwrap();
    client.send(ApiRequest::get(Resource::Notes)).await.unwrap();

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.credential.is_none()));
}

#[tokio::test]
async fn real_sessions_attach_the_bearer_credential() {
    let transport = MockTransport::new();
    let record = SessionRecord::new(Credential::new("issued_token"), principal());
    let (client, _) = client_with(Some(record), transport.clone()).await;

    client.send(ApiRequest::get(Resource::Podcasts)).await.unwrap();

    assert_eq!(
        transport.last_request().unwrap().credential.as_deref(),
        Some("issued_token")
    );
}

#[tokio::test]
async fn failed_podcast_creation_is_recovered_with_an_echo() {
    let (client, _) = client_with(
        Some(SessionRecord::demo(principal())),
        MockTransport::failing(),
    )
    .await;

    let service = PodcastService::new(client, Arc::new(MockNotifier::new()));
    let created = service
        .create(NewPodcast {
            title: "Cell Biology".to_owned(),
            content: "Mitochondria are the powerhouse".to_owned(),
            voice_id: Some("female1".to_owned()),
            tags: vec!["bio".to_owned(), "exam".to_owned()],
        })
        .await
        .unwrap();

    // the fabricated record echoes the submission
    assert_eq!(created.title, "Cell Biology");
    assert_eq!(created.content, "Mitochondria are the powerhouse");
    assert_eq!(created.voice_id, "female1");
    assert_eq!(created.tags, vec!["bio", "exam"]);
    assert_eq!(created.duration, 120.5);
    assert!(created.id.starts_with("demo_podcast_"));
}

#[tokio::test]
async fn demo_catalogs_are_fabricated_when_the_backend_is_down() {
    let (client, _) = client_with(
        Some(SessionRecord::demo(principal())),
        MockTransport::failing(),
    )
    .await;

    let service = PodcastService::new(client, Arc::new(MockNotifier::new()));

    let podcasts = service.list().await.unwrap();
    assert_eq!(podcasts.len(), 2);
    assert_eq!(podcasts[0].id, "demo_podcast_1");

    let voices = service.voices().await;
    assert_eq!(voices.len(), 3);
    assert_eq!(voices[1].id, "male1");
}

#[tokio::test]
async fn unmapped_demo_requests_get_the_generic_acknowledgement() {
    let (client, _) = client_with(
        Some(SessionRecord::demo(principal())),
        MockTransport::failing(),
    )
    .await;

    let response = client
        .send(ApiRequest::delete(Resource::Note("n1".to_owned())))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Demo mode response");
}

#[tokio::test]
async fn non_demo_failures_propagate_to_the_caller() {
    let record = SessionRecord::new(Credential::new("issued_token"), principal());
    let (client, _) = client_with(Some(record), MockTransport::failing()).await;

    let notifier = MockNotifier::new();
    let service = NoteService::new(client, Arc::new(notifier.clone()));

    assert!(service.list().await.is_err());
    assert!(notifier.saw(satchel::NoticeLevel::Error, "Failed to fetch notes"));
}

#[tokio::test]
async fn a_401_is_logged_but_never_clears_the_session() {
    // one policy for every endpoint
    let endpoints = [
        ApiRequest::get(Resource::Podcasts),
        ApiRequest::get(Resource::Notes),
        ApiRequest::post(Resource::NotesFromYoutube, json!({"youtube_url": "u"})),
    ];

    let record = SessionRecord::new(Credential::new("stale_token"), principal());
    let transport = MockTransport::new();
    let (client, store) = client_with(Some(record.clone()), transport.clone()).await;

    for request in endpoints {
        transport.respond_with(401, json!({"detail": "Could not validate credentials"}));

        let result = client.send(request).await;
        assert_eq!(result, Err(ClientError::Unauthorized));

        // session untouched, no redirect is forced by the pipeline
        assert_eq!(store.read().await.unwrap(), Some(record.clone()));
    }
}
