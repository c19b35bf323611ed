use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, IngredientList};

const PROMPT_PREFIX: &str = "Write a recipe using the following ingredients: ";

const HTML_INSTRUCTIONS: &str = "\n\nFormat the recipe as an HTML fragment that follows this template exactly, \
with no surrounding markdown or <html>/<body> tags:\n\
<div class=\"recipe\">\n\
  <h2 class=\"recipe-title\">Recipe name</h2>\n\
  <ul class=\"recipe-ingredients\"><li>Ingredient with quantity</li></ul>\n\
  <ol class=\"recipe-steps\"><li>Step</li></ol>\n\
</div>";

/// Output convention requested from the completion model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStyle {
    /// Free-form prose
    #[default]
    Plain,
    /// HTML fragment with fixed class names, for direct rendering
    Html,
}

/// A prompt asking for a recipe built from an ingredient list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePrompt {
    text: String,
}

impl RecipePrompt {
    pub fn build(ingredients: &IngredientList, style: RecipeStyle) -> Result<Self, DomainError> {
        if ingredients.is_empty() {
            return Err(DomainError::validation(
                "At least one ingredient is required to generate a recipe",
            ));
        }

        let mut text = format!("{}{}", PROMPT_PREFIX, ingredients.joined());

        if style == RecipeStyle::Html {
            text.push_str(HTML_INSTRUCTIONS);
        }

        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
