//! Filesystem asset store

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::domain::{AssetNaming, AssetStore, DomainError, ImageFormat, UploadedAsset};

/// Stores uploads in a local directory served under `/imgs`
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
    public_base_url: String,
    naming: AssetNaming,
}

impl LocalAssetStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
            naming: AssetNaming::default(),
        }
    }

    pub fn with_naming(mut self, naming: AssetNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Create the upload directory if it does not exist yet
    pub async fn init(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create upload directory '{}': {}",
                self.root.display(),
                e
            ))
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// URL under which a stored file is served
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/imgs/{}", self.public_base_url.trim_end_matches('/'), filename)
    }

    /// Write the bytes and return the asset with its local path as location
    pub(super) async fn write(
        &self,
        format: ImageFormat,
        data: &[u8],
    ) -> Result<UploadedAsset, DomainError> {
        let (id, filename) = self.naming.assign(format);
        let path = self.root.join(&filename);

        tokio::fs::write(&path, data).await.map_err(|e| {
            DomainError::storage(format!("Failed to write '{}': {}", path.display(), e))
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored uploaded image");

        Ok(UploadedAsset {
            id,
            url: self.public_url(&filename),
            location: path.display().to_string(),
            filename,
            format,
        })
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn store(&self, format: ImageFormat, data: Bytes) -> Result<UploadedAsset, DomainError> {
        self.write(format, &data).await
    }

    fn naming(&self) -> AssetNaming {
        self.naming
    }

    fn store_name(&self) -> &'static str {
        "local"
    }
}
