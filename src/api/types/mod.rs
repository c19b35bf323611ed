//! HTTP request and response types

pub mod error;
pub mod image;
pub mod json;
pub mod recipe;

pub use error::{ApiError, ApiErrorResponse};
pub use image::{
    AnalyzeImageRequest, AnalyzeImageResponse, CaptionBody, UploadImageRequest,
    UploadImageResponse,
};
pub use json::Json;
pub use recipe::{GenerateRecipeRequest, GenerateRecipeResponse};
