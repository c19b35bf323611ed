//! Router fixtures shared by handler tests

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api::router::create_router;
use crate::api::state::AppState;
use crate::config::AnalysisMode;
use crate::domain::image::MockAssetStore;
use crate::domain::recipe::MockCompletionProvider;
use crate::domain::vision::MockVisionAnalyzer;
use crate::domain::{AssetStore, RecipeGenerator, RecipeSettings};
use crate::infrastructure::services::AnalysisService;

pub const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// Mocks wired into a router, kept around for assertions
pub struct TestApp {
    pub router: Router,
    pub vision: Arc<MockVisionAnalyzer>,
    pub completions: Arc<MockCompletionProvider>,
    pub upload_dir: TempDir,
}

pub struct TestAppBuilder {
    vision: MockVisionAnalyzer,
    completions: MockCompletionProvider,
    asset_store: Option<Arc<dyn AssetStore>>,
    mode: AnalysisMode,
    settings: RecipeSettings,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            vision: MockVisionAnalyzer::new(),
            completions: MockCompletionProvider::new(),
            asset_store: None,
            mode: AnalysisMode::Ingredients,
            settings: RecipeSettings::plain(),
        }
    }

    pub fn vision(mut self, vision: MockVisionAnalyzer) -> Self {
        self.vision = vision;
        self
    }

    pub fn completions(mut self, completions: MockCompletionProvider) -> Self {
        self.completions = completions;
        self
    }

    pub fn asset_store(mut self, store: Arc<dyn AssetStore>) -> Self {
        self.asset_store = Some(store);
        self
    }

    pub fn mode(mut self, mode: AnalysisMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn settings(mut self, settings: RecipeSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> TestApp {
        let upload_dir = TempDir::new().unwrap();
        let vision = Arc::new(self.vision);
        let completions = Arc::new(self.completions);
        let asset_store = self
            .asset_store
            .unwrap_or_else(|| Arc::new(MockAssetStore::new()) as Arc<dyn AssetStore>);

        let state = AppState::new(
            AnalysisService::new(vision.clone()),
            RecipeGenerator::new(completions.clone(), self.settings),
            asset_store,
        )
        .with_analysis_mode(self.mode);

        TestApp {
            router: create_router(state, upload_dir.path(), TEST_BODY_LIMIT),
            vision,
            completions,
            upload_dir,
        }
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>, Option<String>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec(), content_type)
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, body, _) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String, Option<String>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body, content_type) = self.send(request).await;
        (status, String::from_utf8(body).unwrap(), content_type)
    }
}
