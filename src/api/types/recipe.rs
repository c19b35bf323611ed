//! Request and response bodies for recipe generation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::IngredientList;

/// POST /generate_recipe body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    pub ingredients: Option<Value>,
}

impl GenerateRecipeRequest {
    /// A list of strings that is non-empty after normalization, else `None`
    pub fn ingredients(&self) -> Option<IngredientList> {
        let items = self.ingredients.as_ref()?.as_array()?;

        let strings = items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;

        let list = IngredientList::from_client(strings);
        (!list.is_empty()).then_some(list)
    }
}

/// POST /generate_recipe response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRecipeResponse {
    pub recipe: String,
}
