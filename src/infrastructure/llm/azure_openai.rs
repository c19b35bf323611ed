use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{CompletionProvider, CompletionRequest, DomainError};
use crate::infrastructure::http_client::HttpClientTrait;

const PROVIDER: &str = "azure_openai";

/// Azure OpenAI API configuration
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
}

impl AzureOpenAiConfig {
    pub const DEFAULT_DEPLOYMENT: &'static str = "baseMod";
    pub const DEFAULT_API_VERSION: &'static str = "2024-02-01";

    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            deployment: Self::DEFAULT_DEPLOYMENT.to_string(),
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }
}

/// Azure OpenAI text-completions client
#[derive(Debug)]
pub struct AzureOpenAiCompletions<C: HttpClientTrait> {
    client: C,
    config: AzureOpenAiConfig,
}

impl<C: HttpClientTrait> AzureOpenAiCompletions<C> {
    pub fn new(client: C, config: AzureOpenAiConfig) -> Self {
        Self { client, config }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }

    fn build_request(&self, request: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "prompt": request.prompt,
            "max_tokens": request.max_tokens,
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("api-key", self.config.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let response: AzureCompletionResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(PROVIDER, format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::upstream(PROVIDER, "No choices in response"))?;

        Ok(choice.text)
    }
}

#[async_trait]
impl<C: HttpClientTrait> CompletionProvider for AzureOpenAiCompletions<C> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, DomainError> {
        let url = self.build_url();
        let body = self.build_request(&request);

        let response = self
            .client
            .post_json(&url, self.headers(), &body)
            .await
            .map_err(|e| DomainError::upstream(PROVIDER, e.message()))?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// Azure OpenAI completions API types

#[derive(Debug, Deserialize)]
struct AzureCompletionResponse {
    #[serde(default)]
    choices: Vec<AzureCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct AzureCompletionChoice {
    #[serde(default)]
    text: String,
}
