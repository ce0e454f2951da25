//! Cloudflare Workers AI provider
//!
//! Calls the Workers AI REST endpoint:
//!
//! ```text
//! POST {base_url}/accounts/{account_id}/ai/run/{model}
//! Authorization: Bearer {api_token}
//! { "messages": [ { "role": "...", "content": "..." } ] }
//! ```
//!
//! and reads the reply from `result.response`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::conversation::ChatMessage;

use super::{Inference, ProviderError};

#[derive(Debug, Clone)]
pub struct WorkersAiConfig {
    pub base_url: String,
    pub account_id: String,
    pub api_token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WorkersAiConfig {
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.cloudflare.com/client/v4".to_string(),
            account_id: account_id.into(),
            api_token: api_token.into(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct RunResponse {
    #[serde(default)]
    result: Option<RunResult>,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

pub struct WorkersAiProvider {
    config: WorkersAiConfig,
    client: Client,
}

impl WorkersAiProvider {
    pub fn new(config: WorkersAiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn run_url(&self, model: &str) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.account_id,
            model
        )
    }
}

#[async_trait]
impl Inference for WorkersAiProvider {
    async fn run(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<Option<String>, ProviderError> {
        let response = self
            .client
            .post(self.run_url(model))
            .bearer_auth(&self.config.api_token)
            .json(&RunRequest { messages })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: Result<RunResponse, _> = serde_json::from_str(&body);

        if !status.is_success() {
            if let Ok(run) = parsed {
                if let Some(err) = run.errors.first() {
                    return Err(ProviderError::InvalidResponse(format!(
                        "API error: {}",
                        err.message
                    )));
                }
            }
            return Err(ProviderError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let run = parsed.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {} - Body: {}", e, body))
        })?;

        if run.success == Some(false) {
            let message = run
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "request was not successful".to_string());
            return Err(ProviderError::InvalidResponse(format!("API error: {}", message)));
        }

        Ok(run.result.and_then(|r| r.response))
    }
}
