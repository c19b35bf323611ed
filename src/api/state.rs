//! Application state for shared services

use std::sync::Arc;

use crate::config::AnalysisMode;
use crate::domain::{AssetStore, RecipeGenerator, RecipeStyle};
use crate::infrastructure::services::AnalysisService;

/// Service clients built once at startup and shared by every request
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: AnalysisService,
    pub recipe_generator: RecipeGenerator,
    pub asset_store: Arc<dyn AssetStore>,
    pub analysis_mode: AnalysisMode,
}

impl AppState {
    pub fn new(
        analysis_service: AnalysisService,
        recipe_generator: RecipeGenerator,
        asset_store: Arc<dyn AssetStore>,
    ) -> Self {
        Self {
            analysis_service,
            recipe_generator,
            asset_store,
            analysis_mode: AnalysisMode::default(),
        }
    }

    pub fn with_analysis_mode(mut self, mode: AnalysisMode) -> Self {
        self.analysis_mode = mode;
        self
    }

    pub fn recipe_style(&self) -> RecipeStyle {
        self.recipe_generator.settings().style
    }
}
