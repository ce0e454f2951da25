//! AI inference integrations

mod openai_compat;
mod workers_ai;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::conversation::ChatMessage;

pub use openai_compat::{OpenAICompatConfig, OpenAICompatProvider};
pub use workers_ai::{WorkersAiConfig, WorkersAiProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// An inference service that turns a message sequence into one reply.
///
/// `Ok(None)` means the service answered but returned no text.
#[async_trait]
pub trait Inference: Send + Sync {
    async fn run(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<Option<String>, ProviderError>;
}

/// Stands in when no backend could be configured, so pages still render and
/// the proxy answers with its usual error payload.
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Inference for Unavailable {
    async fn run(&self, _: &str, _: &[ChatMessage]) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::NotConfigured(self.reason.clone()))
    }
}

/// Build the inference backend selected by `config.provider`
pub fn from_config(config: &Config) -> Result<Arc<dyn Inference>, ProviderError> {
    match config.provider.to_lowercase().as_str() {
        "workers-ai" | "workers_ai" | "cloudflare" => {
            let account_id = config
                .cloudflare_account_id
                .clone()
                .ok_or_else(|| ProviderError::NotConfigured("CLOUDFLARE_ACCOUNT_ID".into()))?;
            let api_token = config
                .cloudflare_api_token
                .clone()
                .ok_or_else(|| ProviderError::NotConfigured("CLOUDFLARE_API_TOKEN".into()))?;

            let mut wa = WorkersAiConfig::new(account_id, api_token);
            if let Some(url) = &config.inference_url {
                wa.base_url = url.clone();
            }
            Ok(Arc::new(WorkersAiProvider::new(wa)?))
        }
        "openai" | "openai-compat" => {
            let base_url = config
                .inference_url
                .clone()
                .unwrap_or_else(|| OpenAICompatConfig::default().base_url);
            let oc = OpenAICompatConfig {
                base_url,
                api_key: config.inference_api_key.clone(),
                ..Default::default()
            };
            Ok(Arc::new(OpenAICompatProvider::new(oc)?))
        }
        other => Err(ProviderError::UnknownProvider(other.to_string())),
    }
}
