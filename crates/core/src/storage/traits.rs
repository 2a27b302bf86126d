use async_trait::async_trait;

use crate::blog::{NewPost, Post, PostChanges};

use super::Result;

/// Repository for blog post operations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Gets all posts, most recent first (descending id).
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Gets a post by its ID. Returns `None` for an absent id.
    async fn get_post(&self, id: i64) -> Result<Option<Post>>;

    /// Creates a new post and returns its assigned ID.
    async fn create_post(&self, post: &NewPost) -> Result<i64>;

    /// Overwrites title, content, and filename of an existing post.
    ///
    /// Returns `NotFound` when no row matches the id.
    async fn update_post(&self, id: i64, changes: &PostChanges) -> Result<()>;

    /// Deletes a post by its ID.
    ///
    /// Returns `true` when a row was removed. Deleting an absent id is a
    /// silent no-op that returns `false`, not an error.
    async fn delete_post(&self, id: i64) -> Result<bool>;
}
