//! Domain layer - Core business logic and entities

pub mod error;
pub mod image;
pub mod ingredient;
pub mod recipe;
pub mod vision;

pub use error::DomainError;
pub use image::{
    decode_base64_image, AssetNaming, AssetStore, DecodedImage, ImageFormat, ImageReference,
    UploadedAsset,
};
pub use ingredient::IngredientList;
pub use recipe::{
    CompletionProvider, CompletionRequest, RecipeGenerator, RecipePrompt, RecipeSettings,
    RecipeStyle, RecipeText,
};
pub use vision::{
    cache_busted_url, Caption, ReadResult, TextBlock, TextLine, VisionAnalyzer, VisionResult,
    VisualFeature,
};
