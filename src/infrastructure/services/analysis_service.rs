//! Analysis service - image URL to caption or ingredient list

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{
    cache_busted_url, Caption, DomainError, ImageReference, IngredientList, VisionAnalyzer,
    VisualFeature,
};

/// Runs the vision stage of the pipeline
#[derive(Debug, Clone)]
pub struct AnalysisService {
    vision: Arc<dyn VisionAnalyzer>,
    cache_bust: bool,
}

impl AnalysisService {
    pub fn new(vision: Arc<dyn VisionAnalyzer>) -> Self {
        Self {
            vision,
            cache_bust: false,
        }
    }

    /// Append a timestamp to URL images before analysis
    pub fn with_cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    pub fn cache_bust(&self) -> bool {
        self.cache_bust
    }

    /// Caption the image; `None` when the service produced no caption
    pub async fn caption(&self, image: ImageReference) -> Result<Option<Caption>, DomainError> {
        let image = self.prepare(image)?;
        let result = self.vision.analyze(&image, &[VisualFeature::Caption]).await?;

        debug!(has_caption = result.caption.is_some(), "Caption analysis finished");

        Ok(result.caption)
    }

    /// Recognize text and normalize it into ingredients
    pub async fn ingredients(&self, image: ImageReference) -> Result<IngredientList, DomainError> {
        let image = self.prepare(image)?;
        let result = self.vision.analyze(&image, &[VisualFeature::Read]).await?;
        let ingredients = IngredientList::from_vision(&result);

        info!(
            service = self.vision.service_name(),
            ingredient_count = ingredients.len(),
            "Extracted ingredients from image"
        );

        Ok(ingredients)
    }

    fn prepare(&self, image: ImageReference) -> Result<ImageReference, DomainError> {
        match image {
            ImageReference::Url(url) if self.cache_bust => {
                Ok(ImageReference::Url(cache_busted_url(&url, Utc::now())?))
            }
            other => Ok(other),
        }
    }
}
