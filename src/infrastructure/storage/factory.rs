//! Asset store factory for runtime store selection

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client as S3Client;
use tracing::info;

use super::local::LocalAssetStore;
use super::s3::{S3AssetStore, S3StoreConfig};
use crate::domain::{AssetStore, DomainError};

/// Supported asset store types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStoreType {
    /// Upload directory on the local filesystem
    Local,
    /// Upload directory mirrored to an S3 bucket
    S3,
}

impl AssetStoreType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "local" | "fs" | "filesystem" => Some(Self::Local),
            "s3" | "object" | "object-store" | "object_store" => Some(Self::S3),
            _ => None,
        }
    }
}

/// Factory for creating asset stores
#[derive(Debug)]
pub struct AssetStoreFactory;

impl AssetStoreFactory {
    /// Build the store. The local directory is created up front in both modes.
    pub async fn create(
        local: LocalAssetStore,
        object_store: Option<S3StoreConfig>,
    ) -> Result<Arc<dyn AssetStore>, DomainError> {
        local.init().await?;

        match object_store {
            None => {
                info!(root = %local.root().display(), "Using local asset store");
                Ok(Arc::new(local))
            }
            Some(config) => {
                info!(
                    bucket = %config.bucket,
                    region = %config.region,
                    "Using S3 asset store"
                );
                let client = Self::create_s3_client(&config.region).await;
                Ok(Arc::new(S3AssetStore::new(local, client, config)))
            }
        }
    }

    async fn create_s3_client(region: &str) -> S3Client {
        let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let config = aws_sdk_s3::config::Builder::from(&shared)
            .region(Region::new(region.to_string()))
            .build();

        S3Client::from_conf(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_type_from_str() {
        assert_eq!(AssetStoreType::from_str("local"), Some(AssetStoreType::Local));
        assert_eq!(AssetStoreType::from_str("S3"), Some(AssetStoreType::S3));
        assert_eq!(AssetStoreType::from_str("gcs"), None);
    }

    #[tokio::test]
    async fn test_create_local_store() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("imgs");

        let store = AssetStoreFactory::create(LocalAssetStore::new(&root, ""), None)
            .await
            .unwrap();

        assert_eq!(store.store_name(), "local");
        assert!(root.is_dir());
    }
}
