//! Client for the Anthropic Messages API, used only by the external-model analyzer.
//!
//! One request shape (a system prompt plus a single user turn) and one reply shape (the
//! first text block). Rate limits, 5xx replies and connect/timeout failures are retried
//! with doubling delays. Anything else fails at once and the analyzer falls back to its
//! rule-based result.

pub mod json;
pub mod prompts;

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
/// Model used for resume reviews.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API key not configured")]
    MissingApiKey,

    #[error("request to the model API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("model reply contained no text")]
    EmptyReply,

    #[error("model reply is not the expected JSON: {snippet}")]
    UnparseableReply { snippet: String },
}

impl LlmError {
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Transport(e) => e.is_timeout() || e.is_connect(),
            LlmError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'static str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesReply {
    content: Vec<ReplyBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplyBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl MessagesReply {
    fn into_text(self) -> Option<String> {
        self.content.into_iter().find_map(|block| match block {
            ReplyBlock::Text { text } if !text.trim().is_empty() => Some(text),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorReply {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Error bodies are `{"error": {"message": ...}}`; anything else is reported raw.
fn api_error_message(raw: String) -> String {
    serde_json::from_str::<ApiErrorReply>(&raw)
        .map(|e| e.error.message)
        .unwrap_or(raw)
}

fn backoff(attempt: u32) -> Duration {
    BASE_DELAY * 2u32.pow(attempt.saturating_sub(1))
}

#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, api_key })
    }

    /// Sends one system + user exchange and returns the reply text.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system,
            messages: [UserTurn {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        loop {
            match self.send(&request).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < MAX_ATTEMPTS && e.is_retryable() => {
                    let delay = backoff(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Model call failed, retrying: {e}"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Like `complete`, then recovers a `T` from the reply (see `json::parse_reply`).
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<T, LlmError> {
        let reply = self.complete(system, prompt).await?;
        debug!(chars = reply.len(), "Model reply received");
        json::parse_reply(&reply)
    }

    async fn send(&self, request: &MessagesRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                message: api_error_message(raw),
            });
        }

        let reply: MessagesReply = response.json().await?;
        reply.into_text().ok_or(LlmError::EmptyReply)
    }
}
