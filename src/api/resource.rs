//! Typed request targets.
//!
//! Naming resources as tagged variants instead of URL strings lets the
//! demo-mode fabrication dispatch exhaustively on `(Resource, Method)`.

/// Everything the backend exposes to this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    AuthLogin,
    AuthRegister,
    AuthLogout,
    Podcasts,
    Podcast(String),
    PodcastVoices,
    Notes,
    Note(String),
    NotesFromPdf,
    NotesFromYoutube,
}

impl Resource {
    /// Path relative to the configured base URL.
    pub fn path(&self) -> String {
        match self {
            Self::AuthLogin => "/auth/login".to_owned(),
            Self::AuthRegister => "/auth/register".to_owned(),
            Self::AuthLogout => "/auth/logout".to_owned(),
            Self::Podcasts => "/podcasts".to_owned(),
            Self::Podcast(id) => format!("/podcasts/{id}"),
            Self::PodcastVoices => "/podcasts/voices".to_owned(),
            Self::Notes => "/notes".to_owned(),
            Self::Note(id) => format!("/notes/{id}"),
            Self::NotesFromPdf => "/notes/from-pdf".to_owned(),
            Self::NotesFromYoutube => "/notes/from-youtube".to_owned(),
        }
    }
}

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
