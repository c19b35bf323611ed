//! Vision service implementations

mod azure;

pub use azure::{AzureVisionClient, AzureVisionConfig};
