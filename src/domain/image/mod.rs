//! Image ingress: references, accepted formats and stored uploads

mod asset;
mod format;
mod reference;

pub use asset::{AssetNaming, AssetStore, UploadedAsset};
pub use format::ImageFormat;
pub use reference::{decode_base64_image, DecodedImage, ImageReference};

#[cfg(test)]
pub use asset::mock::MockAssetStore;
