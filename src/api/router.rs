use std::path::Path;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::health;
use super::routes;
use super::state::AppState;

/// Create the full router with application state
///
/// Uploaded files are served from `upload_dir` under `/imgs`.
pub fn create_router(state: AppState, upload_dir: impl AsRef<Path>, max_body_bytes: usize) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .merge(routes::create_routes())
        .nest_service("/imgs", ServeDir::new(upload_dir.as_ref()))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::test_support::{TestAppBuilder, TEST_BODY_LIMIT};

    #[tokio::test]
    async fn test_health_routes() {
        let app = TestAppBuilder::new().build();

        let (status, body, _) = app.get("/health").await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

        let (status, _, _) = app.get("/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_serves_uploaded_files() {
        let app = TestAppBuilder::new().build();
        std::fs::write(app.upload_dir.path().join("abc.png"), b"png-bytes").unwrap();

        let (status, body, content_type) = app.get("/imgs/abc.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png-bytes");
        assert_eq!(content_type.as_deref(), Some("image/png"));

        let (status, _, _) = app.get("/imgs/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let app = TestAppBuilder::new().build();
        let payload = json!({"image": "A".repeat(TEST_BODY_LIMIT + 1)}).to_string();
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/upload")
            .header("content-type", "application/json")
            .body(Body::from(payload))
            .unwrap();

        let (status, _, _) = app.send(request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = TestAppBuilder::new().build();
        let (status, _, _) = app.get("/v1/models").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
