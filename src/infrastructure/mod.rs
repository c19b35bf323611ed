//! Infrastructure layer - External service implementations

pub mod http_client;
pub mod llm;
pub mod logging;
pub mod services;
pub mod storage;
pub mod vision;

pub use http_client::{HttpClient, HttpClientTrait};
