use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Name of the attached media file under the upload directory, if any.
    pub filename: Option<String>,
    pub date_created: DateTime<Utc>,
    /// View counter. Persisted but never incremented by any route.
    pub views: i64,
    /// Pin flag. Persisted but never toggled by any route.
    pub pinned: bool,
}

impl Post {
    /// Returns true if the post has an attached media file.
    pub fn has_media(&self) -> bool {
        self.filename.is_some()
    }
}

/// A new post to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub filename: Option<String>,
    pub date_created: DateTime<Utc>,
}

/// Changes applied to an existing post. Every field overwrites the stored
/// value; callers that want to retain the current media file pass the
/// stored filename back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub filename: Option<String>,
}

/// A post category.
///
/// Defined by the schema but not reachable from any route; kept as typed
/// scaffolding for the `categories` / `post_categories` tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A comment on a post. Schema scaffolding, no route reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub username: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

/// A like on a post. Schema scaffolding, no route reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub user_ip: String,
}

/// An administrator account. One row is seeded at startup; no login flow
/// consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}
