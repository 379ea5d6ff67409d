//! LLM Client: the single point of entry for calls to the local text-generation service.
//!
//! Talks to an Ollama-style `/api/generate` endpoint with streaming disabled.
//! One HTTP call per `generate`; retry and fallback decisions belong to the caller.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3";
const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Keys that may carry the generated text, in priority order.
const TEXT_KEYS: &[&str] = &["response", "text", "result", "output"];

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generation service error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("Generation service returned malformed JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Anything that turns a prompt into text. `LlmClient` in production,
/// scripted generators in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl LlmClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_str(&body)?;
        let text = extract_text(&payload);
        debug!(
            "Generation succeeded: model={}, chars={}",
            self.model,
            text.chars().count()
        );
        Ok(text)
    }
}

/// Picks the generated text out of a response payload. Falls back to the
/// whole payload serialized when none of the known keys is present.
fn extract_text(payload: &Value) -> String {
    TEXT_KEYS
        .iter()
        .find_map(|key| payload.get(key))
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| payload.to_string())
}
