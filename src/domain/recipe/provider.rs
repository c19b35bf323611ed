use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// A single text-completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Trait for text-completion services
#[async_trait]
pub trait CompletionProvider: Send + Sync + Debug {
    /// Return the text of the first completion choice
    async fn complete(&self, request: CompletionRequest) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
