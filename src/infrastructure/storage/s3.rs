//! S3 object-store asset store

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::info;

use super::local::LocalAssetStore;
use crate::domain::{AssetNaming, AssetStore, DomainError, ImageFormat, UploadedAsset};

/// Object storage settings
#[derive(Debug, Clone)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub region: String,
    pub prefix: String,
    /// Overrides the virtual-hosted bucket URL, e.g. a CDN domain
    pub public_base_url: Option<String>,
}

impl S3StoreConfig {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            prefix: String::new(),
            public_base_url: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    pub fn object_key(&self, filename: &str) -> String {
        let prefix = self.prefix.trim_matches('/');
        if prefix.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", prefix, filename)
        }
    }

    pub fn object_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }
}

/// Writes uploads locally, then pushes them to an S3 bucket.
///
/// The returned URL is the public object URL.
#[derive(Debug, Clone)]
pub struct S3AssetStore {
    local: LocalAssetStore,
    client: S3Client,
    config: S3StoreConfig,
}

impl S3AssetStore {
    pub fn new(local: LocalAssetStore, client: S3Client, config: S3StoreConfig) -> Self {
        Self {
            local,
            client,
            config,
        }
    }
}

#[async_trait]
impl AssetStore for S3AssetStore {
    async fn store(&self, format: ImageFormat, data: Bytes) -> Result<UploadedAsset, DomainError> {
        let local = self.local.write(format, &data).await?;
        let key = self.config.object_key(&local.filename);

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .content_type(format.content_type())
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to upload '{}' to S3: {}",
                    key,
                    DisplayErrorContext(&e)
                ))
            })?;

        info!(bucket = %self.config.bucket, key = %key, "Uploaded image to object storage");

        Ok(UploadedAsset {
            url: self.config.object_url(&key),
            location: key,
            ..local
        })
    }

    fn naming(&self) -> AssetNaming {
        self.local.naming()
    }

    fn store_name(&self) -> &'static str {
        "s3"
    }
}
