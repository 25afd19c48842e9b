//! Search backend configuration from TOML (`[search]` section)

use relay_domain::TavilySearchConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Environment variable name for the API key (default: "TAVILY_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var.
    pub api_key: Option<String>,
    /// Base URL for the Tavily API.
    pub base_url: String,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            api_key_env: "TAVILY_API_KEY".to_string(),
            api_key: None,
            base_url: TavilySearchConfig::default().base_url,
        }
    }
}
