use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        pages::{about, contact, home},
        posts::{
            create_post, delete_post, edit_post_form, list_posts, new_post_form, update_post,
            view_post,
        },
        uploads::serve_upload,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/blog", get(list_posts))
        .route("/post/{id}", get(view_post))
        .route("/new_post", get(new_post_form).post(create_post))
        .route("/edit_post/{id}", get(edit_post_form).post(update_post))
        .route("/delete_post/{id}", get(delete_post))
        .route("/uploads/{filename}", get(serve_upload))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{media::MediaStore, storage::sqlite::SqlitePostRepository};

    use super::*;

    const BOUNDARY: &str = "----quillpress-test-boundary";

    async fn test_state() -> AppState {
        let posts = SqlitePostRepository::new_in_memory()
            .await
            .expect("in-memory repository");

        let upload_dir = std::env::temp_dir().join(format!(
            "quillpress-app-test-{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let media = MediaStore::new(&upload_dir).expect("media store");

        AppState::new(Arc::new(posts), media)
    }

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(name: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
        let mut part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        part.extend_from_slice(bytes);
        part.extend_from_slice(b"\r\n");
        part
    }

    fn multipart_request(uri: &str, parts: Vec<Vec<u8>>) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(&part);
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_page() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Quillpress"));
    }

    #[tokio::test]
    async fn test_static_pages() {
        let app = create_app(test_state().await);

        for uri in ["/about", "/contact"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_blog_empty() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(Request::builder().uri("/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("No posts yet"));
    }

    #[tokio::test]
    async fn test_create_post_and_list() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![
                text_part("title", "First post").into_bytes(),
                text_part("content", "Hello from the blog").into_bytes(),
            ],
        );
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/blog"
        );

        let response = app
            .oneshot(Request::builder().uri("/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("First post"));
    }

    #[tokio::test]
    async fn test_create_post_missing_title() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![text_part("content", "No title here").into_bytes()],
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_view_post() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![
                text_part("title", "Readable").into_bytes(),
                text_part("content", "Full body text").into_bytes(),
            ],
        );
        app.clone().oneshot(request).await.unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Readable"));
        assert!(html.contains("Full body text"));
    }

    #[tokio::test]
    async fn test_view_nonexistent_post() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/post/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_post() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![
                text_part("title", "Old title").into_bytes(),
                text_part("content", "Old content").into_bytes(),
            ],
        );
        app.clone().oneshot(request).await.unwrap();

        // Form comes back pre-filled
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/edit_post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Old title"));

        let request = multipart_request(
            "/edit_post/1",
            vec![
                text_part("title", "New title").into_bytes(),
                text_part("content", "New content").into_bytes(),
            ],
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("New title"));
        assert!(!html.contains("Old content"));
    }

    #[tokio::test]
    async fn test_edit_without_media_keeps_stored_file() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![
                text_part("title", "Illustrated").into_bytes(),
                text_part("content", "v1").into_bytes(),
                file_part("media", "one.png", b"first bytes"),
            ],
        );
        app.clone().oneshot(request).await.unwrap();

        // Editing with no media part keeps the stored filename
        let request = multipart_request(
            "/edit_post/1",
            vec![
                text_part("title", "Illustrated").into_bytes(),
                text_part("content", "v2").into_bytes(),
            ],
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let page = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(page).await;
        assert!(html.contains("v2"));
        assert!(html.contains("/uploads/one.png"));

        // Supplying a new media part replaces it
        let request = multipart_request(
            "/edit_post/1",
            vec![
                text_part("title", "Illustrated").into_bytes(),
                text_part("content", "v3").into_bytes(),
                file_part("media", "two.png", b"second bytes"),
            ],
        );
        app.clone().oneshot(request).await.unwrap();

        let page = app
            .oneshot(
                Request::builder()
                    .uri("/post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(page).await;
        assert!(html.contains("/uploads/two.png"));
        assert!(!html.contains("/uploads/one.png"));
    }

    #[tokio::test]
    async fn test_edit_nonexistent_post() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/edit_post/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_post() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![
                text_part("title", "Doomed").into_bytes(),
                text_part("content", "Gone soon").into_bytes(),
            ],
        );
        app.clone().oneshot(request).await.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/delete_post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_post_redirects() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/delete_post/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_create_with_media_and_serve_upload() {
        let app = create_app(test_state().await);

        let request = multipart_request(
            "/new_post",
            vec![
                text_part("title", "With picture").into_bytes(),
                text_part("content", "Look at this").into_bytes(),
                file_part("media", "a b.png", b"\x89PNG fake bytes"),
            ],
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        // Filename is sanitized on save
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/uploads/a_b.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );

        let post_page = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let html = body_string(post_page).await;
        assert!(html.contains("/uploads/a_b.png"));

        // Deleting the post removes its media file as well
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/delete_post/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/uploads/a_b.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_serve_missing_upload() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/uploads/nothing.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
