//! Multipart form payload for creating and editing posts.

use axum::extract::multipart::{Multipart, MultipartError};
use thiserror::Error;

/// Errors raised while reading the post form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Missing form field '{name}'")]
    MissingField { name: &'static str },
    #[error("Failed to parse form: {0}")]
    Multipart(#[from] MultipartError),
}

/// A media file part uploaded alongside the form.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    /// The filename the client supplied, unsanitized.
    pub client_name: String,
    pub bytes: Vec<u8>,
}

/// Request payload for creating or editing a post.
///
/// Parsed from a `multipart/form-data` body with fields `title`,
/// `content`, and an optional `media` file part. A media part with an
/// empty client filename counts as absent, matching a browser submitting
/// an untouched file input.
#[derive(Debug)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub media: Option<MediaUpload>,
}

impl PostForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<PostForm, FormError> {
        let mut title = None;
        let mut content = None;
        let mut media = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "title" => title = Some(field.text().await?),
                "content" => content = Some(field.text().await?),
                "media" => {
                    let client_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    if !client_name.is_empty() {
                        media = Some(MediaUpload {
                            client_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(PostForm {
            title: title.ok_or(FormError::MissingField { name: "title" })?,
            content: content.ok_or(FormError::MissingField { name: "content" })?,
            media,
        })
    }
}
