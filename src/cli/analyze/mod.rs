//! Analyze command - runs the image pipeline once and prints JSON

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::CaptionBody;
use crate::config::{AppConfig, ServiceSecrets};
use crate::domain::{DomainError, ImageFormat, ImageReference, IngredientList};
use crate::infrastructure::logging;

/// Arguments for the analyze command
#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// Publicly reachable image URL, or a local png/jpeg/gif file sent inline
    pub image: String,

    /// Also caption the image
    #[arg(long)]
    pub caption: bool,

    /// Generate a recipe from the extracted ingredients
    #[arg(long)]
    pub recipe: bool,
}

/// Pipeline result printed to stdout
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<CaptionBody>,
    pub ingredients: IngredientList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let secrets = ServiceSecrets::from_env()?;
    let state = crate::create_app_state(&config, &secrets).await?;

    let output = analyze(&state, &args).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// `http(s)://` input is analyzed by URL; anything else is read from disk
async fn resolve_image(input: &str) -> Result<ImageReference, DomainError> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        return ImageReference::url(input);
    }

    let format = ImageFormat::from_filename(input)?;
    let data = tokio::fs::read(input)
        .await
        .map_err(|e| DomainError::validation(format!("Failed to read '{}': {}", input, e)))?;

    if data.is_empty() {
        return Err(DomainError::validation(format!("'{}' is empty", input)));
    }

    Ok(ImageReference::bytes(data, format))
}

/// Vision stage, then the recipe stage when requested and ingredients were found
pub async fn analyze(state: &AppState, args: &AnalyzeArgs) -> Result<AnalyzeOutput, DomainError> {
    let image = resolve_image(&args.image).await?;

    let caption = if args.caption {
        Some(state.analysis_service.caption(image.clone()).await?.into())
    } else {
        None
    };

    let ingredients = state.analysis_service.ingredients(image).await?;

    let recipe = if args.recipe && !ingredients.is_empty() {
        let recipe = state.recipe_generator.generate(&ingredients).await?;
        Some(recipe.into_string())
    } else {
        None
    };

    info!(
        ingredient_count = ingredients.len(),
        recipe = recipe.is_some(),
        "Analysis finished"
    );

    Ok(AnalyzeOutput {
        caption,
        ingredients,
        recipe,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::image::MockAssetStore;
    use crate::domain::recipe::MockCompletionProvider;
    use crate::domain::vision::MockVisionAnalyzer;
    use crate::domain::{
        Caption, ReadResult, RecipeGenerator, RecipeSettings, TextBlock, VisionResult,
    };
    use crate::infrastructure::services::AnalysisService;

    fn state(vision: MockVisionAnalyzer, completions: Arc<MockCompletionProvider>) -> AppState {
        AppState::new(
            AnalysisService::new(Arc::new(vision)),
            RecipeGenerator::new(completions, RecipeSettings::plain()),
            Arc::new(MockAssetStore::new()),
        )
    }

    fn args(recipe: bool, caption: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            image: "https://example.com/list.jpg".to_string(),
            caption,
            recipe,
        }
    }

    fn list_result() -> VisionResult {
        VisionResult::new()
            .with_caption(Caption::new("a shopping list", 0.9))
            .with_read(ReadResult {
                blocks: vec![TextBlock::from_lines(["eggs", " milk "])],
            })
    }

    #[tokio::test]
    async fn test_analyze_with_recipe() {
        let completions = Arc::new(MockCompletionProvider::new().with_response(" Pancakes "));
        let state = state(MockVisionAnalyzer::new().with_result(list_result()), completions.clone());

        let output = analyze(&state, &args(true, true)).await.unwrap();

        assert_eq!(output.ingredients.as_slice(), ["eggs", "milk"]);
        assert_eq!(output.recipe.as_deref(), Some("Pancakes"));
        assert_eq!(
            output.caption.and_then(|c| c.text).as_deref(),
            Some("a shopping list")
        );
        assert_eq!(completions.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_no_ingredients_skips_recipe() {
        let completions = Arc::new(MockCompletionProvider::new().with_response("unused"));
        let state = state(MockVisionAnalyzer::new(), completions.clone());

        let output = analyze(&state, &args(true, false)).await.unwrap();

        assert!(output.ingredients.is_empty());
        assert!(output.recipe.is_none());
        assert!(completions.requests().is_empty());

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json, serde_json::json!({"ingredients": []}));
    }

    #[tokio::test]
    async fn test_vision_failure_propagates() {
        let state = state(
            MockVisionAnalyzer::new().with_error("quota exceeded"),
            Arc::new(MockCompletionProvider::new()),
        );

        let err = analyze(&state, &args(false, false)).await.unwrap_err();
        assert_eq!(err.message(), "quota exceeded");
    }

    #[tokio::test]
    async fn test_local_file_is_sent_as_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("list.JPG");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let vision = Arc::new(MockVisionAnalyzer::new().with_result(list_result()));
        let state = AppState::new(
            AnalysisService::new(vision.clone()),
            RecipeGenerator::new(Arc::new(MockCompletionProvider::new()), RecipeSettings::plain()),
            Arc::new(MockAssetStore::new()),
        );
        let args = AnalyzeArgs {
            image: path.display().to_string(),
            caption: false,
            recipe: false,
        };

        let output = analyze(&state, &args).await.unwrap();

        assert_eq!(output.ingredients.as_slice(), ["eggs", "milk"]);
        assert_eq!(
            vision.calls()[0].0,
            ImageReference::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0], ImageFormat::Jpeg)
        );
    }

    #[tokio::test]
    async fn test_resolve_image_errors() {
        let err = resolve_image("/nonexistent/list.png").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = resolve_image("notes.txt").await.unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat { .. }));
    }
}
