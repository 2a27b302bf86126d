//! Application state shared by all request handlers.

use std::sync::Arc;

use quillpress_core::storage::PostRepository;

use crate::media::MediaStore;

/// Shared application state.
///
/// Cloned for each request handler. Holds the post repository trait object
/// and the media store.
#[derive(Clone)]
pub struct AppState {
    /// Post repository backed by SQLite.
    pub posts: Arc<dyn PostRepository>,
    /// Store for uploaded media files.
    pub media: MediaStore,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, media: MediaStore) -> Self {
        Self { posts, media }
    }
}
