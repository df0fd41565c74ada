//! Chat-completion client for the upstream model

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::RelayError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for an OpenAI-style `/chat/completions` endpoint.
///
/// One request per call: no retries, no streaming, no timeout beyond what the
/// transport imposes.
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_url: &str, api_key: &str, model: &str) -> Result<Self, RelayError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RelayError::Internal(format!("failed to build HTTP client: {}", e)))?;

        info!("LLM client: url={} model={}", api_url, model);
        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `messages` and return the first choice's content.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, RelayError> {
        debug!(
            model = %self.model,
            messages = messages.len(),
            "Calling chat completion API"
        );

        let resp = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&ChatRequest {
                model: &self.model,
                messages,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| {
                warn!("Chat completion request failed: {}", e);
                RelayError::Upstream(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Chat completion API returned error");
            let detail = if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, body.trim())
            };
            return Err(RelayError::Upstream(detail));
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .map_err(|e| RelayError::Internal(format!("invalid upstream response: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| RelayError::Internal("upstream response has no choices".to_string()))?;

        debug!(chars = content.len(), "Chat completion received");
        Ok(content)
    }
}
