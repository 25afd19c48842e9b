//! Model provider configuration from TOML (`[providers]` section)

use relay_domain::providers::{
    AnthropicProviderConfig, DEFAULT_MAX_TOKENS, DeepSeekProviderConfig,
};
use serde::{Deserialize, Serialize};

/// Anthropic API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "CLAUDE_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var.
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        let resolved = AnthropicProviderConfig::default();
        Self {
            api_key_env: "CLAUDE_API_KEY".to_string(),
            api_key: None,
            base_url: resolved.base_url,
            model: resolved.model,
            max_tokens: DEFAULT_MAX_TOKENS,
            api_version: resolved.api_version,
        }
    }
}

/// DeepSeek API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeepSeekConfig {
    /// Environment variable name for the API key (default: "DEEPSEEK_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var.
    pub api_key: Option<String>,
    /// Base URL for the DeepSeek API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileDeepSeekConfig {
    fn default() -> Self {
        let resolved = DeepSeekProviderConfig::default();
        Self {
            api_key_env: "DEEPSEEK_API_KEY".to_string(),
            api_key: None,
            base_url: resolved.base_url,
            model: resolved.model,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Primary model backend settings.
    pub anthropic: FileAnthropicConfig,
    /// Secondary model backend settings.
    pub deepseek: FileDeepSeekConfig,
}
