//! Anthropic Messages API backend (primary model).

use super::error::ModelCallError;
use super::http::ChatBackend;
use relay_domain::AnthropicProviderConfig;
use reqwest::RequestBuilder;
use serde_json::Value;

pub struct AnthropicBackend {
    config: AnthropicProviderConfig,
}

impl AnthropicBackend {
    pub fn new(config: AnthropicProviderConfig) -> Self {
        Self { config }
    }
}

impl ChatBackend for AnthropicBackend {
    const LABEL: &'static str = "Claude";

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
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
        request
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.config.api_version)
    }

    /// The first `text` block of the `content` array.
    fn extract_reply(&self, body: &Value) -> Result<String, ModelCallError> {
        let no_response = ModelCallError::NoResponse {
            backend: Self::LABEL,
        };

        let blocks = match body.get("content").and_then(Value::as_array) {
            Some(blocks) if !blocks.is_empty() => blocks,
            _ => return Err(no_response),
        };

        blocks
            .iter()
            .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
            .find_map(|block| block.get("text").and_then(Value::as_str))
            .map(str::to_string)
            .ok_or(no_response)
    }
}
