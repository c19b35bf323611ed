//! Recipe generation domain models and traits

mod generator;
mod prompt;
mod provider;

pub use generator::{RecipeGenerator, RecipeSettings, RecipeText};
pub use prompt::{RecipePrompt, RecipeStyle};
pub use provider::{CompletionProvider, CompletionRequest};

#[cfg(test)]
pub use provider::mock::MockCompletionProvider;
