//! Podcast generation and playback records.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{ApiClient, ApiRequest, Resource, Transport};
use crate::notify::{Notice, Notifier};
use crate::session::SessionStore;
use crate::ClientError;

/// A generated podcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub audio_url: String,
    pub duration: f64,
    pub voice_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A text-to-speech voice option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Input for podcast creation.
#[derive(Debug, Clone, Default)]
pub struct NewPodcast {
    pub title: String,
    pub content: String,
    /// Defaults to `"default"` when unset.
    pub voice_id: Option<String>,
    pub tags: Vec<String>,
}

/// Client for `/podcasts`.
pub struct PodcastService<S: SessionStore, T: Transport> {
    client: Arc<ApiClient<S, T>>,
    notifier: Arc<dyn Notifier>,
}

impl<S: SessionStore, T: Transport> PodcastService<S, T> {
    pub fn new(client: Arc<ApiClient<S, T>>, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Fetches all podcasts for the current user.
    pub async fn list(&self) -> Result<Vec<Podcast>, ClientError> {
        self.fetch_list()
            .await
            .inspect_err(|_| self.notifier.notify(Notice::error("Failed to fetch podcasts")))
    }

    /// Fetches a specific podcast.
    pub async fn get(&self, id: &str) -> Result<Podcast, ClientError> {
        self.fetch_one(id)
            .await
            .inspect_err(|_| self.notifier.notify(Notice::error("Failed to fetch podcast")))
    }

    /// Creates a new podcast from text content.
    pub async fn create(&self, podcast: NewPodcast) -> Result<Podcast, ClientError> {
        match self.submit(podcast).await {
            Ok(created) => {
                self.notifier
                    .notify(Notice::success("Podcast created successfully"));
                Ok(created)
            }
            Err(error) => {
                self.notifier
                    .notify(Notice::error("Failed to create podcast"));
                Err(error)
            }
        }
    }

    /// Deletes a podcast.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        match self
            .client
            .send(ApiRequest::delete(Resource::Podcast(id.to_owned())))
            .await
        {
            Ok(_) => {
                self.notifier
                    .notify(Notice::success("Podcast deleted successfully"));
                Ok(())
            }
            Err(error) => {
                self.notifier
                    .notify(Notice::error("Failed to delete podcast"));
                Err(error)
            }
        }
    }

    /// Fetches the available voices.
    ///
    /// Never fails: when the catalog cannot be fetched the caller gets a
    /// single default voice so the creation form stays usable.
    pub async fn voices(&self) -> Vec<Voice> {
        match self.fetch_voices().await {
            Ok(voices) => voices,
            Err(error) => {
                log::warn!(target: "satchel::podcasts", "voice catalog unavailable: {error}");
                self.notifier
                    .notify(Notice::error("Failed to fetch voices"));
                vec![Voice {
                    id: "default".to_owned(),
                    name: "Default Voice".to_owned(),
                    gender: "neutral".to_owned(),
                    preview_url: None,
                }]
            }
        }
    }

    async fn fetch_list(&self) -> Result<Vec<Podcast>, ClientError> {
        let response = self.client.send(ApiRequest::get(Resource::Podcasts)).await?;
        serde_json::from_value(response.body).map_err(Into::into)
    }

    async fn fetch_one(&self, id: &str) -> Result<Podcast, ClientError> {
        let response = self
            .client
            .send(ApiRequest::get(Resource::Podcast(id.to_owned())))
            .await?;
        serde_json::from_value(response.body).map_err(Into::into)
    }

    async fn fetch_voices(&self) -> Result<Vec<Voice>, ClientError> {
        let response = self
            .client
            .send(ApiRequest::get(Resource::PodcastVoices))
            .await?;
        serde_json::from_value(response.body).map_err(Into::into)
    }

    async fn submit(&self, podcast: NewPodcast) -> Result<Podcast, ClientError> {
        let request = ApiRequest::post(
            Resource::Podcasts,
            json!({
                "title": podcast.title,
                "content": podcast.content,
                "voice_id": podcast.voice_id.unwrap_or_else(|| "default".to_owned()),
                "tags": podcast.tags,
            }),
        );
        let response = self.client.send(request).await?;
        serde_json::from_value(response.body).map_err(Into::into)
    }
}
