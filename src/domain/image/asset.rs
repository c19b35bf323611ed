use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ImageFormat;
use crate::domain::DomainError;

/// How stored uploads are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetNaming {
    /// A fresh 128-bit random token per upload
    #[default]
    Random,
    /// Always `image.<ext>`; every upload overwrites the previous one
    Fixed,
}

impl AssetNaming {
    /// Returns `(id, filename)` for a new upload of the given format
    pub fn assign(&self, format: ImageFormat) -> (String, String) {
        let id = match self {
            Self::Random => Uuid::new_v4().simple().to_string(),
            Self::Fixed => "image".to_string(),
        };
        let filename = format!("{}.{}", id, format.extension());
        (id, filename)
    }

    /// Whether the same URL can point at different bytes over time
    pub fn is_mutable(&self) -> bool {
        matches!(self, Self::Fixed)
    }
}

/// A stored image file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub id: String,
    pub filename: String,
    pub format: ImageFormat,
    /// Local path or object-store key
    pub location: String,
    /// Publicly addressable URL
    pub url: String,
}

/// Drop point for uploaded images
#[async_trait]
pub trait AssetStore: Send + Sync + std::fmt::Debug {
    /// Persist the bytes and return the stored asset
    async fn store(&self, format: ImageFormat, data: Bytes) -> Result<UploadedAsset, DomainError>;

    /// Naming policy used by this store
    fn naming(&self) -> AssetNaming;

    /// Get the store name
    fn store_name(&self) -> &'static str;
}
