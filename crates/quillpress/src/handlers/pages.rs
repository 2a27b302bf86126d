//! Static page handlers: fixed templates, no data access.

use askama::Template;
use axum::response::IntoResponse;

use super::HtmlTemplate;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate;

/// Handler for the home page (GET /).
pub async fn home() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate)
}

/// Handler for the about page (GET /about).
pub async fn about() -> impl IntoResponse {
    HtmlTemplate(AboutTemplate)
}

/// Handler for the contact page (GET /contact).
pub async fn contact() -> impl IntoResponse {
    HtmlTemplate(ContactTemplate)
}
