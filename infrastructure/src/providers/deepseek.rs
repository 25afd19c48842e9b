//! DeepSeek chat completions backend (secondary model).

use super::error::ModelCallError;
use super::http::ChatBackend;
use relay_domain::DeepSeekProviderConfig;
use reqwest::RequestBuilder;
use serde_json::Value;

pub struct DeepSeekBackend {
    config: DeepSeekProviderConfig,
}

impl DeepSeekBackend {
    pub fn new(config: DeepSeekProviderConfig) -> Self {
        Self { config }
    }
}

impl ChatBackend for DeepSeekBackend {
    const LABEL: &'static str = "DeepSeek";

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn max_tokens(&self) -> u32 {
        self.config.max_tokens
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }

    fn authorize(&self, request: RequestBuilder, api_key: &str) -> RequestBuilder {
        request.bearer_auth(api_key)
    }

    /// `choices[0].message.content`
    fn extract_reply(&self, body: &Value) -> Result<String, ModelCallError> {
        let first = match body.get("choices").and_then(Value::as_array) {
            Some(choices) if !choices.is_empty() => &choices[0],
            _ => {
                return Err(ModelCallError::NoResponse {
                    backend: Self::LABEL,
                });
            }
        };

        let message = first
            .get("message")
            .filter(|m| m.is_object())
            .ok_or(ModelCallError::UnexpectedFormat {
                backend: Self::LABEL,
                detail: "missing message",
            })?;

        message
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ModelCallError::UnexpectedFormat {
                backend: Self::LABEL,
                detail: "invalid content",
            })
    }
}
