//! Backend configuration types (provider-neutral, serde-free).
//!
//! These hold resolved values: credentials have already been looked up from
//! the config file or the environment by the infrastructure layer.

/// Default generation cap for both model backends.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Settings for every outbound backend.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Primary model backend.
    pub anthropic: AnthropicProviderConfig,
    /// Secondary model backend.
    pub deepseek: DeepSeekProviderConfig,
    /// Web search backend.
    pub search: TavilySearchConfig,
}

/// Anthropic Messages API configuration.
#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    /// API key; `None` when absent or blank.
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Model identifier sent in every request.
    pub model: String,
    /// Max tokens per response (default: 2000).
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for AnthropicProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-opus-4-1-20250805".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_version: "2023-06-01".to_string(),
        }
    }
}

/// DeepSeek chat completions API configuration.
#[derive(Debug, Clone)]
pub struct DeepSeekProviderConfig {
    /// API key; `None` when absent or blank.
    pub api_key: Option<String>,
    /// Base URL for the DeepSeek API.
    pub base_url: String,
    /// Model identifier sent in every request.
    pub model: String,
    /// Max tokens per response (default: 2000).
    pub max_tokens: u32,
}

impl Default for DeepSeekProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Tavily search API configuration.
#[derive(Debug, Clone)]
pub struct TavilySearchConfig {
    /// API key; `None` when absent or blank.
    pub api_key: Option<String>,
    /// Base URL for the Tavily API.
    pub base_url: String,
}

impl Default for TavilySearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.tavily.com".to_string(),
        }
    }
}
