//! Typed wrappers over the request pipeline, one per backend area.
//!
//! Each service decodes responses into its record types and emits the
//! transient success/failure notices the UI shows as toasts.

pub mod auth;
pub mod notes;
pub mod podcasts;

pub use auth::{AuthApi, AuthResponse, RemoteUser};
pub use notes::{NewNote, Note, NoteService, NoteUpdate, PdfImport, YoutubeImport};
pub use podcasts::{NewPodcast, Podcast, PodcastService, Voice};
