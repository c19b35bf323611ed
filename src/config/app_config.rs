use serde::Deserialize;

use crate::domain::{AssetNaming, RecipeSettings, RecipeStyle};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub uploads: UploadsConfig,
    pub analysis: AnalysisConfig,
    pub recipe: RecipeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for URLs handed back by `/upload`; empty yields relative URLs
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub dir: String,
    pub naming: AssetNaming,
    /// `local` or `s3`
    pub store: String,
    /// Request body limit for uploads and JSON payloads
    pub max_body_bytes: usize,
}

/// Which payload `/analyze_image` answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// `{"caption": {"text", "confidence"}}`
    Caption,
    /// `{"ingredients": [...]}`
    #[default]
    Ingredients,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub mode: AnalysisMode,
    /// Append a timestamp to image URLs before analysis. Unset means: only
    /// when uploads are overwritten in place.
    pub cache_bust: Option<bool>,
}

impl AnalysisConfig {
    pub fn cache_bust_for(&self, naming: AssetNaming) -> bool {
        self.cache_bust.unwrap_or_else(|| naming.is_mutable())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeConfig {
    pub style: RecipeStyle,
    pub max_tokens: Option<u32>,
}

impl RecipeConfig {
    pub fn settings(&self) -> RecipeSettings {
        let defaults = match self.style {
            RecipeStyle::Plain => RecipeSettings::plain(),
            RecipeStyle::Html => RecipeSettings::html(),
        };

        RecipeSettings {
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            ..defaults
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            public_base_url: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: "imgs".to_string(),
            naming: AssetNaming::default(),
            store: "local".to_string(),
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
