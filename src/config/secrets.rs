//! Service endpoints and keys read from the environment

use crate::domain::DomainError;

/// Credentials for the external services. Required values fail startup.
#[derive(Clone)]
pub struct ServiceSecrets {
    pub vision_endpoint: String,
    pub vision_key: String,
    pub vision_api_version: Option<String>,
    pub openai_endpoint: String,
    pub openai_api_key: String,
    pub openai_deployment: Option<String>,
    pub openai_api_version: Option<String>,
    pub object_store: Option<ObjectStoreSecrets>,
}

/// Optional object storage settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStoreSecrets {
    pub bucket: String,
    pub region: String,
    pub prefix: Option<String>,
    pub public_base_url: Option<String>,
}

impl ServiceSecrets {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every value through `lookup`; blank values count as missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            optional(name).unwrap_or_else(|| {
                missing.push(name);
                String::new()
            })
        };

        let vision_endpoint = required("VISION_ENDPOINT");
        let vision_key = required("VISION_KEY");
        let openai_endpoint = required("AZURE_OPENAI_ENDPOINT");
        let openai_api_key = required("AZURE_OPENAI_API_KEY");

        if !missing.is_empty() {
            return Err(DomainError::configuration(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let object_store = optional("S3_BUCKET").map(|bucket| ObjectStoreSecrets {
            bucket,
            region: optional("S3_REGION")
                .or_else(|| optional("AWS_REGION"))
                .unwrap_or_else(|| "us-east-1".to_string()),
            prefix: optional("S3_PREFIX"),
            public_base_url: optional("S3_PUBLIC_BASE_URL"),
        });

        Ok(Self {
            vision_endpoint,
            vision_key,
            vision_api_version: optional("VISION_API_VERSION"),
            openai_endpoint,
            openai_api_key,
            openai_deployment: optional("AZURE_OPENAI_DEPLOYMENT"),
            openai_api_version: optional("AZURE_OPENAI_API_VERSION"),
            object_store,
        })
    }
}

impl std::fmt::Debug for ServiceSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSecrets")
            .field("vision_endpoint", &self.vision_endpoint)
            .field("vision_key", &"[REDACTED]")
            .field("openai_endpoint", &self.openai_endpoint)
            .field("openai_api_key", &"[REDACTED]")
            .field("openai_deployment", &self.openai_deployment)
            .field("object_store", &self.object_store)
            .finish()
    }
}
