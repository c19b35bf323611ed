//! Text-completion provider implementations

mod azure_openai;

pub use azure_openai::{AzureOpenAiCompletions, AzureOpenAiConfig};
