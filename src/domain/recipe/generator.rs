use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionProvider, CompletionRequest, RecipePrompt, RecipeStyle};
use crate::domain::{DomainError, IngredientList};

/// Generated recipe, plain text or an HTML fragment. Never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeText(String);

impl RecipeText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Knobs for recipe generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSettings {
    pub style: RecipeStyle,
    pub max_tokens: u32,
}

impl RecipeSettings {
    pub const PLAIN_MAX_TOKENS: u32 = 150;
    pub const HTML_MAX_TOKENS: u32 = 300;

    pub fn plain() -> Self {
        Self {
            style: RecipeStyle::Plain,
            max_tokens: Self::PLAIN_MAX_TOKENS,
        }
    }

    pub fn html() -> Self {
        Self {
            style: RecipeStyle::Html,
            max_tokens: Self::HTML_MAX_TOKENS,
        }
    }
}

impl Default for RecipeSettings {
    fn default() -> Self {
        Self::plain()
    }
}

/// Turns an ingredient list into a recipe through a completion provider
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn CompletionProvider>,
    settings: RecipeSettings,
}

impl RecipeGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: RecipeSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> RecipeSettings {
        self.settings
    }

    pub async fn generate(&self, ingredients: &IngredientList) -> Result<RecipeText, DomainError> {
        let prompt = RecipePrompt::build(ingredients, self.settings.style)?;

        debug!(
            provider = self.provider.provider_name(),
            ingredient_count = ingredients.len(),
            max_tokens = self.settings.max_tokens,
            "Requesting recipe completion"
        );

        let text = self
            .provider
            .complete(CompletionRequest::new(
                prompt.into_string(),
                self.settings.max_tokens,
            ))
            .await?;

        Ok(RecipeText(text.trim().to_string()))
    }
}
