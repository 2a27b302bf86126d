//! Boundary error type for request handlers.
//!
//! Handlers return `AppError`, a thin wrapper over `anyhow::Error`, and
//! use `?` freely thanks to the blanket `From` below. On the way out, a
//! wrapped `RepositoryError` is mapped to its HTTP status; any other
//! error is a 500. The body is the error's display text, so a missing
//! post surfaces as a plain-text 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quillpress_core::storage::{repository_error_to_status_code, RepositoryError};

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
