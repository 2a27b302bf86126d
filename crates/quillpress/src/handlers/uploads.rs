//! Serves uploaded media files (GET /uploads/{filename}).

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Guess a Content-Type from the file extension. Unknown extensions are
/// served as opaque bytes.
fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    match state.media.open(&filename) {
        Some(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&filename))],
            bytes,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}
