//! Presentation pages

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::domain::{IngredientList, RecipeStyle};

const INDEX_PAGE: &str = include_str!("../../../templates/index.html");
const CAPTURE_PAGE: &str = include_str!("../../../templates/capture.html");
const RECIPE_PAGE: &str = include_str!("../../../templates/recipe.html");

const INGREDIENTS_PLACEHOLDER: &str = "__INGREDIENTS__";
const STYLE_PLACEHOLDER: &str = "__RECIPE_STYLE__";

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// GET /capture
pub async fn capture() -> Html<&'static str> {
    Html(CAPTURE_PAGE)
}

/// GET /recipe?ingredients=a&ingredients=b
///
/// Renders the recipe page for the given ingredients; the page itself calls
/// `/generate_recipe`.
pub async fn recipe(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let ingredients = ingredients_from_query(query.as_deref().unwrap_or_default());

    if ingredients.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing ingredients").into_response();
    }

    Html(render_recipe_page(&ingredients, state.recipe_style())).into_response()
}

/// Collect every `ingredients` parameter, normalized like a client list
fn ingredients_from_query(query: &str) -> IngredientList {
    let items = url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "ingredients")
        .map(|(_, value)| value.into_owned())
        .collect();

    IngredientList::from_client(items)
}

fn render_recipe_page(ingredients: &IngredientList, style: RecipeStyle) -> String {
    // Embedded inside a <script> block
    let ingredients_json = serde_json::to_string(ingredients)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c");
    let style = match style {
        RecipeStyle::Plain => "plain",
        RecipeStyle::Html => "html",
    };

    RECIPE_PAGE
        .replace(INGREDIENTS_PLACEHOLDER, &ingredients_json)
        .replace(STYLE_PLACEHOLDER, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::TestAppBuilder;
    use crate::domain::RecipeSettings;

    #[test]
    fn test_ingredients_from_query() {
        let list = ingredients_from_query("ingredients=eggs&ingredients=+green%20onion+&other=x&ingredients=");
        assert_eq!(list.as_slice(), ["eggs", "green onion"]);

        assert!(ingredients_from_query("").is_empty());
        assert!(ingredients_from_query("ingredient=eggs").is_empty());
    }

    #[test]
    fn test_render_escapes_script_breakout() {
        let list = IngredientList::from_client(vec!["</script><b>".to_string()]);
        let page = render_recipe_page(&list, RecipeStyle::Plain);

        assert!(!page.contains("</script><b>"));
        assert!(page.contains("\\u003c/script>"));
        assert!(!page.contains(INGREDIENTS_PLACEHOLDER));
        assert!(!page.contains(STYLE_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_static_pages() {
        let app = TestAppBuilder::new().build();

        for uri in ["/", "/capture"] {
            let (status, body, content_type) = app.get(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(content_type.unwrap().starts_with("text/html"));
            assert!(body.contains("<html"));
        }
    }

    #[tokio::test]
    async fn test_recipe_page_requires_ingredients() {
        let app = TestAppBuilder::new().build();

        let (status, body, content_type) = app.get("/recipe").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Missing ingredients");
        assert!(content_type.unwrap().starts_with("text/plain"));
    }

    #[tokio::test]
    async fn test_recipe_page_embeds_ingredients() {
        let app = TestAppBuilder::new().settings(RecipeSettings::html()).build();

        let (status, body, _) = app.get("/recipe?ingredients=eggs&ingredients=milk").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"["eggs","milk"]"#));
        assert!(body.contains(r#""html""#));
    }
}
