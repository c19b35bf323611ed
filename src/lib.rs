//! Recipe Vision
//!
//! A thin HTTP backend in two stages:
//! - an image (URL or upload) goes to Azure AI Vision and the recognized text is
//!   normalized into an ingredient list
//! - a client-supplied ingredient list goes to an Azure OpenAI completions
//!   deployment and comes back as a recipe

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::ServiceSecrets;
use domain::{AssetStore, DomainError, RecipeGenerator};
use infrastructure::{
    llm::{AzureOpenAiCompletions, AzureOpenAiConfig},
    services::AnalysisService,
    storage::{AssetStoreFactory, AssetStoreType, LocalAssetStore, S3StoreConfig},
    vision::{AzureVisionClient, AzureVisionConfig},
    HttpClient,
};
use tracing::info;

/// Build every service client once and wire them into the shared state
pub async fn create_app_state(
    config: &AppConfig,
    secrets: &ServiceSecrets,
) -> Result<AppState, DomainError> {
    let http = HttpClient::new();

    let mut vision_config = AzureVisionConfig::new(&secrets.vision_endpoint, &secrets.vision_key);
    if let Some(ref version) = secrets.vision_api_version {
        vision_config = vision_config.with_api_version(version);
    }
    let vision = Arc::new(AzureVisionClient::new(http.clone(), vision_config));

    let mut completion_config =
        AzureOpenAiConfig::new(&secrets.openai_endpoint, &secrets.openai_api_key);
    if let Some(ref deployment) = secrets.openai_deployment {
        completion_config = completion_config.with_deployment(deployment);
    }
    if let Some(ref version) = secrets.openai_api_version {
        completion_config = completion_config.with_api_version(version);
    }
    let completions = Arc::new(AzureOpenAiCompletions::new(http, completion_config));

    let naming = config.uploads.naming;
    let local = LocalAssetStore::new(&config.uploads.dir, &config.server.public_base_url)
        .with_naming(naming);
    let asset_store = AssetStoreFactory::create(local, object_store_config(config, secrets)?).await?;

    let cache_bust = config.analysis.cache_bust_for(asset_store.naming());
    let settings = config.recipe.settings();

    info!(
        mode = ?config.analysis.mode,
        store = asset_store.store_name(),
        naming = ?asset_store.naming(),
        cache_bust,
        recipe_style = ?settings.style,
        max_tokens = settings.max_tokens,
        "Application state created"
    );

    Ok(AppState::new(
        AnalysisService::new(vision).with_cache_bust(cache_bust),
        RecipeGenerator::new(completions, settings),
        asset_store,
    )
    .with_analysis_mode(config.analysis.mode))
}

/// Object store settings when uploads should be mirrored to S3
///
/// A configured `S3_BUCKET` enables the mirror even when `uploads.store` is
/// left at `local`.
fn object_store_config(
    config: &AppConfig,
    secrets: &ServiceSecrets,
) -> Result<Option<S3StoreConfig>, DomainError> {
    let store_type = AssetStoreType::from_str(&config.uploads.store).ok_or_else(|| {
        DomainError::configuration(format!(
            "Unknown asset store type '{}'. Expected 'local' or 's3'",
            config.uploads.store
        ))
    })?;

    let Some(ref object_store) = secrets.object_store else {
        if store_type == AssetStoreType::S3 {
            return Err(DomainError::configuration(
                "The s3 asset store requires S3_BUCKET to be set",
            ));
        }
        return Ok(None);
    };

    let mut s3 = S3StoreConfig::new(&object_store.bucket, &object_store.region);
    if let Some(ref prefix) = object_store.prefix {
        s3 = s3.with_prefix(prefix);
    }
    if let Some(ref url) = object_store.public_base_url {
        s3 = s3.with_public_base_url(url);
    }

    Ok(Some(s3))
}
