//! Shared request pipeline for the model backends.

use super::error::ModelCallError;
use async_trait::async_trait;
use relay_application::ports::model_client::ModelClient;
use relay_domain::util::{LOG_PREVIEW_CHARS, preview};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// What varies between model backends.
pub trait ChatBackend: Send + Sync {
    /// Name used in diagnostics, e.g. `"Claude"`.
    const LABEL: &'static str;

    /// Full URL of the completion endpoint
    fn endpoint(&self) -> String;

    fn model(&self) -> &str;

    fn max_tokens(&self) -> u32;

    /// Resolved credential, `None` when absent
    fn api_key(&self) -> Option<&str>;

    /// Attach the backend's auth and versioning headers
    fn authorize(&self, request: RequestBuilder, api_key: &str) -> RequestBuilder;

    /// Pull the reply text out of a successful response body
    fn extract_reply(&self, body: &Value) -> Result<String, ModelCallError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Request body shared by both backends: one user message, no system prompt.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

impl<'a> ChatRequest<'a> {
    fn user(model: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        }
    }
}

/// Best available error text from a failed response: `error.message`, then a
/// top-level `message`, then the body exactly as received.
pub(crate) fn api_error_message(body: &Value, raw: &str) -> String {
    let non_empty = |v: &Value| v.as_str().filter(|m| !m.is_empty()).map(str::to_string);
    body.pointer("/error/message")
        .and_then(non_empty)
        .or_else(|| body.get("message").and_then(non_empty))
        .unwrap_or_else(|| raw.to_string())
}

/// A [`ModelClient`] that performs one JSON POST per invocation.
pub struct HttpModelClient<B> {
    backend: B,
    http: reqwest::Client,
}

impl<B: ChatBackend> HttpModelClient<B> {
    pub fn new(backend: B, http: reqwest::Client) -> Self {
        Self { backend, http }
    }

    /// Run the request and surface every failure as a [`ModelCallError`].
    pub async fn try_invoke(&self, prompt: &str) -> Result<String, ModelCallError> {
        let api_key = self
            .backend
            .api_key()
            .ok_or(ModelCallError::MissingApiKey { backend: B::LABEL })?;

        let endpoint = self.backend.endpoint();
        debug!(
            "{} request to {} ({} chars): {}",
            B::LABEL,
            endpoint,
            prompt.chars().count(),
            preview(prompt, LOG_PREVIEW_CHARS)
        );

        let body = ChatRequest::user(self.backend.model(), prompt, self.backend.max_tokens());
        let request = self.http.post(&endpoint).json(&body);

        let response = self
            .backend
            .authorize(request, api_key)
            .send()
            .await
            .map_err(|e| ModelCallError::Transport {
                backend: B::LABEL,
                message: e.to_string(),
            })?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ModelCallError::Transport {
                backend: B::LABEL,
                message: e.to_string(),
            })?;

        let data: Value = serde_json::from_str(&raw).map_err(|e| ModelCallError::Parse {
            backend: B::LABEL,
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(ModelCallError::Api {
                backend: B::LABEL,
                status: status.as_u16(),
                message: api_error_message(&data, &raw),
            });
        }

        self.backend.extract_reply(&data)
    }
}

#[async_trait]
impl<B: ChatBackend> ModelClient for HttpModelClient<B> {
    async fn invoke(&self, prompt: &str) -> String {
        match self.try_invoke(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("{} call failed: {}", B::LABEL, e);
                e.to_string()
            }
        }
    }
}
