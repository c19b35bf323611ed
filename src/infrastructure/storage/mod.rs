//! Asset storage infrastructure - Upload drop points

mod factory;
mod local;
mod s3;

pub use factory::{AssetStoreFactory, AssetStoreType};
pub use local::LocalAssetStore;
pub use s3::{S3AssetStore, S3StoreConfig};
