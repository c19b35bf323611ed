//! Application configuration and environment secrets

mod app_config;
mod secrets;

pub use app_config::{
    AnalysisConfig, AnalysisMode, AppConfig, LogFormat, LoggingConfig, RecipeConfig,
    ServerConfig, UploadsConfig,
};
pub use secrets::{ObjectStoreSecrets, ServiceSecrets};
