//! Request and response bodies for image endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Caption, IngredientList};

/// POST /analyze_image body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeImageRequest {
    #[serde(default)]
    pub image_url: Option<Value>,
}

impl AnalyzeImageRequest {
    /// The URL when present as a non-blank string
    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_ref()
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
    }
}

/// Caption payload; both fields are null when the service returned no caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionBody {
    pub text: Option<String>,
    pub confidence: Option<f64>,
}

impl From<Option<Caption>> for CaptionBody {
    fn from(caption: Option<Caption>) -> Self {
        match caption {
            Some(caption) => Self {
                text: Some(caption.text),
                confidence: Some(caption.confidence),
            },
            None => Self {
                text: None,
                confidence: None,
            },
        }
    }
}

/// POST /analyze_image response, shape chosen by the analysis mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyzeImageResponse {
    Caption { caption: CaptionBody },
    Ingredients { ingredients: IngredientList },
}

/// POST /upload JSON body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadImageRequest {
    #[serde(default)]
    pub image: Option<Value>,
}

impl UploadImageRequest {
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(Value::as_str)
            .filter(|image| !image.trim().is_empty())
    }
}

/// POST /upload response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImageResponse {
    pub url: String,
}
