//! Chat submission flow
//!
//! A [`ChatSession`] owns the transcript for one page view and guards it with
//! a two-state machine: while a reply is outstanding, further submissions are
//! ignored. Every accepted submission ends with exactly one assistant message,
//! either the reply or a synthesized apology.

mod client;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversation::{ChatMessage, Message, Transcript};

pub use client::{CompletionsClient, HttpCompletionsClient};

/// Used when the reply parsed but carried no content
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error.";

/// Used when the request itself failed
pub const ERROR_REPLY: &str =
    "Sorry, I encountered an error while processing your request. Please try again.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Failed to get response: HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Body sent to the completions endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Chat-completion shaped reply. `choices` must be present; below it every
/// level is optional so a partial reply still yields the fallback text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Wrap a single assistant reply
    pub fn assistant(content: Option<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ChoiceMessage {
                    role: "assistant".to_string(),
                    content,
                }),
            }],
        }
    }

    /// Content of the first choice, if it has any text
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

#[derive(Debug)]
pub struct ChatSession {
    transcript: Transcript,
    state: ChatState,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            state: ChatState::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == ChatState::AwaitingReply
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    /// Accept a user message.
    ///
    /// Returns the outbound request (the whole transcript including the new
    /// message), or `None` when the content is blank or a reply is pending.
    pub fn submit(&mut self, content: &str) -> Option<CompletionRequest> {
        let content = content.trim();
        if content.is_empty() || self.is_loading() {
            return None;
        }

        self.transcript.add_user(content);
        self.state = ChatState::AwaitingReply;

        Some(CompletionRequest {
            messages: self.transcript.to_wire(),
        })
    }

    /// Record the outcome of the outstanding request and return to idle.
    pub fn settle(&mut self, result: Result<CompletionResponse, ChatError>) {
        let content = match result {
            Ok(response) => response
                .first_content()
                .unwrap_or(FALLBACK_REPLY)
                .to_string(),
            Err(e) => {
                tracing::error!("Chat error: {}", e);
                ERROR_REPLY.to_string()
            }
        };

        self.transcript.add_assistant(&content);
        self.state = ChatState::Idle;
    }

    /// Submit `content` and wait for the reply.
    ///
    /// Returns `false` without calling the client when the submission is
    /// rejected.
    pub async fn send<C>(&mut self, content: &str, client: &C) -> bool
    where
        C: CompletionsClient + ?Sized,
    {
        let Some(request) = self.submit(content) else {
            return false;
        };

        let result = client.complete(&request).await;
        self.settle(result);
        true
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
