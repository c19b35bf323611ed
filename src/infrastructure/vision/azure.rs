use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    Caption, DomainError, ImageReference, ReadResult, TextBlock, VisionAnalyzer, VisionResult,
    VisualFeature,
};
use crate::infrastructure::http_client::HttpClientTrait;

const SERVICE: &str = "azure_vision";

/// Azure AI Vision (Image Analysis 4.0) configuration
#[derive(Debug, Clone)]
pub struct AzureVisionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub gender_neutral_caption: bool,
}

impl AzureVisionConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: "2023-10-01".to_string(),
            gender_neutral_caption: true,
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }
}

/// Azure AI Vision image analysis client
#[derive(Debug)]
pub struct AzureVisionClient<C: HttpClientTrait> {
    client: C,
    config: AzureVisionConfig,
}

impl<C: HttpClientTrait> AzureVisionClient<C> {
    pub fn new(client: C, config: AzureVisionConfig) -> Self {
        Self { client, config }
    }

    fn build_url(&self, features: &[VisualFeature]) -> String {
        let features = features
            .iter()
            .map(VisualFeature::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let mut url = format!(
            "{}/computervision/imageanalysis:analyze?api-version={}&features={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.api_version,
            features
        );

        if self.config.gender_neutral_caption {
            url.push_str("&gender-neutral-caption=true");
        }

        url
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<VisionResult, DomainError> {
        let response: AnalyzeResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(SERVICE, format!("Failed to parse response: {}", e))
        })?;

        let mut result = VisionResult::new();

        if let Some(caption) = response.caption_result {
            result = result.with_caption(Caption::new(caption.text, caption.confidence));
        }

        if let Some(read) = response.read_result {
            result = result.with_read(ReadResult {
                blocks: read
                    .blocks
                    .into_iter()
                    .map(|block| TextBlock::from_lines(block.lines.into_iter().map(|l| l.text)))
                    .collect(),
            });
        }

        Ok(result)
    }
}

#[async_trait]
impl<C: HttpClientTrait> VisionAnalyzer for AzureVisionClient<C> {
    async fn analyze(
        &self,
        image: &ImageReference,
        features: &[VisualFeature],
    ) -> Result<VisionResult, DomainError> {
        if features.is_empty() {
            return Err(DomainError::validation(
                "At least one visual feature must be requested",
            ));
        }

        let url = self.build_url(features);

        let response = match image {
            ImageReference::Url(image_url) => {
                let headers = vec![
                    ("Ocp-Apim-Subscription-Key", self.config.api_key.as_str()),
                    ("Content-Type", "application/json"),
                ];
                self.client
                    .post_json(&url, headers, &serde_json::json!({ "url": image_url }))
                    .await
            }
            ImageReference::Bytes { data, .. } => {
                let headers = vec![
                    ("Ocp-Apim-Subscription-Key", self.config.api_key.as_str()),
                    ("Content-Type", "application/octet-stream"),
                ];
                self.client.post_bytes(&url, headers, data.clone()).await
            }
        }
        .map_err(|e| DomainError::upstream(SERVICE, e.message()))?;

        self.parse_response(response)
    }

    fn service_name(&self) -> &'static str {
        SERVICE
    }
}

// Azure Image Analysis response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    caption_result: Option<AzureCaption>,
    read_result: Option<AzureReadResult>,
}

#[derive(Debug, Deserialize)]
struct AzureCaption {
    text: String,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct AzureReadResult {
    #[serde(default)]
    blocks: Vec<AzureBlock>,
}

#[derive(Debug, Deserialize)]
struct AzureBlock {
    #[serde(default)]
    lines: Vec<AzureLine>,
}

#[derive(Debug, Deserialize)]
struct AzureLine {
    text: String,
}
