//! Ingredient normalization from recognized text

use serde::{Deserialize, Serialize};

use crate::domain::VisionResult;

/// Ordered, trimmed, non-empty ingredient strings. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    /// Normalize the recognized lines of a vision result.
    ///
    /// Lines are joined with `\n` first, so a single recognized line holding
    /// embedded newlines still splits into separate ingredients.
    pub fn from_vision(result: &VisionResult) -> Self {
        let text = result.text_lines().collect::<Vec<_>>().join("\n");
        Self::from_text(&text)
    }

    /// Split raw text on newlines, trim each line and drop empty ones
    pub fn from_text(text: &str) -> Self {
        Self::from_items(text.split('\n'))
    }

    /// Normalize a list supplied by a client
    pub fn from_client(items: Vec<String>) -> Self {
        Self::from_items(items.iter().map(String::as_str))
    }

    fn from_items<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            items
                .into_iter()
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma separated rendering used in prompts
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
