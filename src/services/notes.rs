//! Note records: manual CRUD plus generation from PDFs and YouTube videos.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiRequest, FileUpload, Resource, Transport};
use crate::notify::{Notice, Notifier};
use crate::session::SessionStore;
use crate::ClientError;

/// A study note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub source_type: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for manual note creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub source_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A PDF to generate notes from.
#[derive(Debug, Clone)]
pub struct PdfImport {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: Option<String>,
    pub tags: Vec<String>,
}

/// A YouTube video to generate notes from.
#[derive(Debug, Clone, Serialize)]
pub struct YoutubeImport {
    pub youtube_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub tags: Vec<String>,
}

/// Client for `/notes`.
pub struct NoteService<S: SessionStore, T: Transport> {
    client: Arc<ApiClient<S, T>>,
    notifier: Arc<dyn Notifier>,
}

impl<S: SessionStore, T: Transport> NoteService<S, T> {
    pub fn new(client: Arc<ApiClient<S, T>>, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let outcome = async {
            let response = self.client.send(ApiRequest::get(Resource::Notes)).await?;
            serde_json::from_value(response.body).map_err(Into::into)
        }
        .await;
        self.finish(outcome, None, "Failed to fetch notes")
    }

    pub async fn get(&self, id: &str) -> Result<Note, ClientError> {
        let outcome = async {
            let response = self
                .client
                .send(ApiRequest::get(Resource::Note(id.to_owned())))
                .await?;
            serde_json::from_value(response.body).map_err(Into::into)
        }
        .await;
        self.finish(outcome, None, "Failed to fetch note")
    }

    /// Creates a note from content the user wrote themselves.
    pub async fn create(&self, note: NewNote) -> Result<Note, ClientError> {
        let outcome = async {
            let body = serde_json::to_value(&note)?;
            let response = self.client.send(ApiRequest::post(Resource::Notes, body)).await?;
            serde_json::from_value(response.body).map_err(Into::into)
        }
        .await;
        self.finish(
            outcome,
            Some("Note created successfully"),
            "Failed to create note",
        )
    }

    /// Uploads a PDF and has the backend generate notes from it.
    pub async fn create_from_pdf(&self, import: PdfImport) -> Result<Note, ClientError> {
        let outcome = async {
            let mut fields = Vec::new();
            if let Some(title) = &import.title {
                fields.push(("title".to_owned(), title.clone()));
            }
            fields.push(("tags".to_owned(), import.tags.join(",")));

            let upload = FileUpload {
                file_name: import.file_name.clone(),
                bytes: import.bytes.clone(),
                fields,
            };
            let response = self
                .client
                .send(ApiRequest::post_multipart(Resource::NotesFromPdf, upload))
                .await?;
            serde_json::from_value(response.body).map_err(Into::into)
        }
        .await;
        self.finish(
            outcome,
            Some("Notes generated from PDF successfully"),
            "Failed to generate notes from PDF",
        )
    }

    /// Has the backend generate notes from a YouTube video.
    pub async fn create_from_youtube(&self, import: YoutubeImport) -> Result<Note, ClientError> {
        let outcome = async {
            let body = serde_json::to_value(&import)?;
            let response = self
                .client
                .send(ApiRequest::post(Resource::NotesFromYoutube, body))
                .await?;
            serde_json::from_value(response.body).map_err(Into::into)
        }
        .await;
        self.finish(
            outcome,
            Some("Notes generated from YouTube successfully"),
            "Failed to generate notes from YouTube",
        )
    }

    pub async fn update(&self, id: &str, update: NoteUpdate) -> Result<Note, ClientError> {
        let outcome = async {
            let body = serde_json::to_value(&update)?;
            let response = self
                .client
                .send(ApiRequest::put(Resource::Note(id.to_owned()), body))
                .await?;
            serde_json::from_value(response.body).map_err(Into::into)
        }
        .await;
        self.finish(
            outcome,
            Some("Note updated successfully"),
            "Failed to update note",
        )
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let outcome = self
            .client
            .send(ApiRequest::delete(Resource::Note(id.to_owned())))
            .await
            .map(|_| ());
        self.finish(
            outcome,
            Some("Note deleted successfully"),
            "Failed to delete note",
        )
    }

    fn finish<V>(
        &self,
        outcome: Result<V, ClientError>,
        success: Option<&str>,
        failure: &str,
    ) -> Result<V, ClientError> {
        match &outcome {
            Ok(_) => {
                if let Some(message) = success {
                    self.notifier.notify(Notice::success(message));
                }
            }
            Err(_) => self.notifier.notify(Notice::error(failure)),
        }
        outcome
    }
}
