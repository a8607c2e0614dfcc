//! Demo-mode response fabrication.
//!
//! When a call fails under a demo session the pipeline answers it locally so
//! the UI never sees a failure. Dispatch is an exhaustive match on
//! `(Resource, Method)`: only the podcast endpoints have bespoke payloads,
//! everything else gets a generic acknowledgement.

use chrono::{Duration, Utc};
use serde_json::{json, Value};

use super::{Method, RequestBody, Resource};

const PLACEHOLDER_AUDIO_1: &str = "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3";
const PLACEHOLDER_AUDIO_2: &str = "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3";

/// Synthesizes the body of a successful response for a failed call.
pub fn fabricate(resource: &Resource, method: Method, body: &RequestBody) -> Value {
    match (resource, method) {
        (Resource::Podcasts, Method::Post) => created_podcast(body),
        (Resource::PodcastVoices, Method::Get) => voice_catalog(),
        (Resource::Podcasts, Method::Get) => podcast_catalog(),
        _ => json!({"success": true, "message": "Demo mode response"}),
    }
}

/// Echoes the submitted podcast back as if the backend had created it.
fn created_podcast(body: &RequestBody) -> Value {
    let submitted = match body {
        RequestBody::Json(value) => value.clone(),
        _ => Value::Null,
    };
    let field = |key: &str, default: Value| submitted.get(key).cloned().unwrap_or(default);

    json!({
        "_id": format!("demo_podcast_{}", suffix()),
        "user_id": "demo_user",
        "title": field("title", json!("Demo Podcast")),
        "content": field("content", json!("This is a demo podcast content.")),
        "audio_url": PLACEHOLDER_AUDIO_1,
        "duration": 120.5,
        "voice_id": field("voice_id", json!("default")),
        "tags": field("tags", json!([])),
        "created_at": Utc::now(),
    })
}

fn voice_catalog() -> Value {
    json!([
        { "id": "default", "name": "Default", "gender": "neutral", "preview_url": null },
        { "id": "male1", "name": "Male Voice", "gender": "male", "preview_url": null },
        { "id": "female1", "name": "Female Voice", "gender": "female", "preview_url": null }
    ])
}

fn podcast_catalog() -> Value {
    json!([
        {
            "_id": "demo_podcast_1",
            "user_id": "demo_user",
            "title": "Demo Podcast 1",
            "content": "This is the first demo podcast content.",
            "audio_url": PLACEHOLDER_AUDIO_1,
            "duration": 120.5,
            "voice_id": "default",
            "tags": ["demo", "example"],
            "created_at": Utc::now(),
        },
        {
            "_id": "demo_podcast_2",
            "user_id": "demo_user",
            "title": "Demo Podcast 2",
            "content": "This is the second demo podcast content.",
            "audio_url": PLACEHOLDER_AUDIO_2,
            "duration": 90.2,
            "voice_id": "female1",
            "tags": ["demo"],
            "created_at": Utc::now() - Duration::days(1),
        }
    ])
}

fn suffix() -> String {
    use rand::Rng;
    rand::thread_rng()
        .sample_iter(rand::distributions::Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
