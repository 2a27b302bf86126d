//! Post CRUD handlers.
//!
//! Each handler is a single-shot, stateless transaction over the post
//! repository; create and update read a `multipart/form-data` body.

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};

use quillpress_core::blog::{NewPost, Post, PostChanges};
use quillpress_core::storage::RepositoryError;

use crate::{
    handlers::{AppError, HtmlTemplate},
    models::PostForm,
    state::AppState,
};

/// Error response with message (for form validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "request error");
    (status, msg)
}

fn display_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    }
}

// ============================================================================
// Templates
// ============================================================================

/// One row of the blog listing.
struct PostRow {
    id: i64,
    title: String,
    date_created: String,
}

#[derive(Template)]
#[template(path = "blog.html")]
struct BlogTemplate {
    posts: Vec<PostRow>,
}

#[derive(Template)]
#[template(path = "post.html")]
struct PostTemplate {
    id: i64,
    title: String,
    content: String,
    date_created: String,
    has_media: bool,
    media_name: String,
}

impl From<Post> for PostTemplate {
    fn from(post: Post) -> Self {
        let has_media = post.has_media();
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            date_created: display_date(&post.date_created),
            has_media,
            media_name: post.filename.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "new_post.html")]
struct PostFormTemplate {
    heading: String,
    action: String,
    title: String,
    content: String,
}

// ============================================================================
// List
// ============================================================================

/// List all posts, most recent first (GET /blog).
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = state
        .posts
        .list_posts()
        .await?
        .into_iter()
        .map(|post| PostRow {
            id: post.id,
            title: post.title,
            date_created: display_date(&post.date_created),
        })
        .collect();

    Ok(HtmlTemplate(BlogTemplate { posts }))
}

// ============================================================================
// View
// ============================================================================

/// View a single post (GET /post/{id}). Plain-text 404 when absent.
pub async fn view_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = state.posts.get_post(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HtmlTemplate(PostTemplate::from(post)))
}

// ============================================================================
// Create
// ============================================================================

/// Show the empty post form (GET /new_post).
pub async fn new_post_form() -> impl IntoResponse {
    HtmlTemplate(PostFormTemplate {
        heading: "New post".to_string(),
        action: "/new_post".to_string(),
        title: String::new(),
        content: String::new(),
    })
}

/// Create a new post (POST /new_post).
///
/// Title and content are required; a missing field is a 400. A media part
/// with a non-empty client filename is saved to the media store. Redirects
/// to the listing on success.
pub async fn create_post(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = match PostForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(err) => {
            return Ok(error_response(StatusCode::BAD_REQUEST, err.to_string()).into_response())
        }
    };

    let filename = match &form.media {
        Some(upload) => Some(state.media.save(&upload.client_name, &upload.bytes)?),
        None => None,
    };

    let id = state
        .posts
        .create_post(&NewPost {
            title: form.title,
            content: form.content,
            filename,
            date_created: Utc::now(),
        })
        .await?;

    tracing::info!(id, "created post");

    Ok(Redirect::to("/blog").into_response())
}

// ============================================================================
// Update
// ============================================================================

/// Show the pre-filled post form (GET /edit_post/{id}) or 404.
pub async fn edit_post_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = state.posts.get_post(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HtmlTemplate(PostFormTemplate {
        heading: "Edit post".to_string(),
        action: format!("/edit_post/{id}"),
        title: post.title,
        content: post.content,
    }))
}

/// Update a post (POST /edit_post/{id}).
///
/// Title, content, and filename are overwritten unconditionally; when no
/// new media is supplied the stored filename is passed back in, so it is
/// retained. The read-then-write here is not atomic against concurrent
/// writers.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let post = state.posts.get_post(id).await?.ok_or_else(|| not_found(id))?;

    let form = match PostForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(err) => {
            return Ok(error_response(StatusCode::BAD_REQUEST, err.to_string()).into_response())
        }
    };

    let filename = match &form.media {
        Some(upload) => Some(state.media.save(&upload.client_name, &upload.bytes)?),
        None => post.filename,
    };

    state
        .posts
        .update_post(
            id,
            &PostChanges {
                title: form.title,
                content: form.content,
                filename,
            },
        )
        .await?;

    tracing::info!(id, "updated post");

    Ok(Redirect::to("/blog").into_response())
}

// ============================================================================
// Delete
// ============================================================================

/// Delete a post (GET /delete_post/{id}).
///
/// Removes the media file (best-effort) and then the row. Redirects to the
/// listing whether or not the post existed; a nonexistent id is a silent
/// no-op.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if let Some(post) = state.posts.get_post(id).await? {
        if let Some(name) = &post.filename {
            state.media.delete(name);
        }
        state.posts.delete_post(id).await?;
        tracing::info!(id, "deleted post");
    }

    Ok(Redirect::to("/blog"))
}
