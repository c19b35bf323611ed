//! Recipe generation endpoint handler

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, GenerateRecipeRequest, GenerateRecipeResponse, Json};

/// POST /generate_recipe
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<Json<GenerateRecipeResponse>, ApiError> {
    let ingredients = request
        .ingredients()
        .ok_or_else(|| ApiError::bad_request("Missing or invalid 'ingredients' in request"))?;

    info!(
        ingredient_count = ingredients.len(),
        style = ?state.recipe_style(),
        "Processing recipe generation request"
    );

    let recipe = state.recipe_generator.generate(&ingredients).await?;

    Ok(Json(GenerateRecipeResponse {
        recipe: recipe.into_string(),
    }))
}
