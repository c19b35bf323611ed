use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use url::Url;

use super::{VisionResult, VisualFeature};
use crate::domain::{DomainError, ImageReference};

/// Trait for vision services (captioning and text recognition)
#[async_trait]
pub trait VisionAnalyzer: Send + Sync + Debug {
    /// Analyze an image for the requested features
    async fn analyze(
        &self,
        image: &ImageReference,
        features: &[VisualFeature],
    ) -> Result<VisionResult, DomainError>;

    /// Get the service name
    fn service_name(&self) -> &'static str;
}

/// Append a `t=<unix millis>` query parameter so edge caches see a new URL.
///
/// Needed when an asset is overwritten in place at a stable URL.
pub fn cache_busted_url(url: &str, now: DateTime<Utc>) -> Result<String, DomainError> {
    let mut parsed = Url::parse(url)
        .map_err(|e| DomainError::validation(format!("Invalid image URL '{}': {}", url, e)))?;

    parsed
        .query_pairs_mut()
        .append_pair("t", &now.timestamp_millis().to_string());

    Ok(parsed.into())
}
