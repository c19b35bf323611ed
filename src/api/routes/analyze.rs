//! Image analysis endpoint handler

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{AnalyzeImageRequest, AnalyzeImageResponse, ApiError, Json};
use crate::config::AnalysisMode;
use crate::domain::ImageReference;

/// POST /analyze_image
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeImageRequest>,
) -> Result<Json<AnalyzeImageResponse>, ApiError> {
    let Some(image_url) = request.image_url() else {
        return Err(ApiError::bad_request("Missing 'image_url' in request"));
    };

    info!(mode = ?state.analysis_mode, "Processing image analysis request");

    let image = ImageReference::url(image_url)?;

    let response = match state.analysis_mode {
        AnalysisMode::Caption => AnalyzeImageResponse::Caption {
            caption: state.analysis_service.caption(image).await?.into(),
        },
        AnalysisMode::Ingredients => AnalyzeImageResponse::Ingredients {
            ingredients: state.analysis_service.ingredients(image).await?,
        },
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::test_support::TestAppBuilder;
    use crate::config::AnalysisMode;
    use crate::domain::vision::MockVisionAnalyzer;
    use crate::domain::{Caption, ReadResult, TextBlock, VisionResult, VisualFeature};

    fn read_result(lines: &[&str]) -> VisionResult {
        VisionResult::new()
            .with_caption(Caption::new("a handwritten list", 0.71))
            .with_read(ReadResult {
                blocks: vec![TextBlock::from_lines(lines.iter().copied())],
            })
    }

    #[tokio::test]
    async fn test_missing_image_url() {
        let app = TestAppBuilder::new().build();

        let (status, body) = app.post_json("/analyze_image", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing 'image_url' in request"}));
        assert!(app.vision.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_url_image_url_is_bad_request() {
        let app = TestAppBuilder::new().build();

        let (status, body) = app
            .post_json("/analyze_image", json!({"image_url": "not a url"}))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid image URL"));
        assert!(app.vision.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ingredients_mode() {
        let app = TestAppBuilder::new()
            .vision(MockVisionAnalyzer::new().with_result(read_result(&["eggs", "", "  milk ", "flour  "])))
            .build();

        let (status, body) = app
            .post_json("/analyze_image", json!({"image_url": "https://example.com/list.jpg"}))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ingredients": ["eggs", "milk", "flour"]}));
        assert_eq!(app.vision.calls()[0].1, vec![VisualFeature::Read]);
    }

    #[tokio::test]
    async fn test_caption_mode() {
        let app = TestAppBuilder::new()
            .mode(AnalysisMode::Caption)
            .vision(MockVisionAnalyzer::new().with_result(read_result(&["eggs"])))
            .build();

        let (status, body) = app
            .post_json("/analyze_image", json!({"image_url": "https://example.com/list.jpg"}))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["caption"]["text"], "a handwritten list");
        assert!((body["caption"]["confidence"].as_f64().unwrap() - 0.71).abs() < 1e-9);
        assert!(body.get("ingredients").is_none());
    }

    #[tokio::test]
    async fn test_caption_mode_without_caption() {
        let app = TestAppBuilder::new().mode(AnalysisMode::Caption).build();

        let (status, body) = app
            .post_json("/analyze_image", json!({"image_url": "https://example.com/blank.jpg"}))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"caption": {"text": null, "confidence": null}}));
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_message_only() {
        let app = TestAppBuilder::new()
            .vision(MockVisionAnalyzer::new().with_error("Image URL is not accessible."))
            .build();

        let (status, body) = app
            .post_json("/analyze_image", json!({"image_url": "https://example.com/gone.jpg"}))
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Image URL is not accessible."}));
        assert!(body.get("ingredients").is_none());
        assert!(body.get("caption").is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = TestAppBuilder::new().build();
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/analyze_image")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{"))
            .unwrap();

        let (status, body, _) = app.send(request).await;
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }
}
