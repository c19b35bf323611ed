//! Application routes

pub mod analyze;
pub mod pages;
pub mod recipe;
pub mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the JSON API and page routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze_image", post(analyze::analyze_image))
        .route("/generate_recipe", post(recipe::generate_recipe))
        .route("/upload", post(upload::upload_image))
        .route("/", get(pages::index))
        .route("/capture", get(pages::capture))
        .route("/recipe", get(pages::recipe))
}
