//! Completions client used by the chat flow

use async_trait::async_trait;
use reqwest::Client;

use super::{ChatError, CompletionRequest, CompletionResponse};

/// Anything that can answer a completion request
#[async_trait]
pub trait CompletionsClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, ChatError>;
}

/// Talks to a running frontend's `/api/chat/completions` endpoint
pub struct HttpCompletionsClient {
    client: Client,
    base_url: String,
}

impl HttpCompletionsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionsClient for HttpCompletionsClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ChatError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::Status(response.status()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ChatError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}
