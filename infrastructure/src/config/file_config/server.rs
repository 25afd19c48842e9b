//! Server configuration from TOML (`[server]` section)

use relay_domain::config::DEFAULT_BIND;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address (default: "127.0.0.1:8787").
    pub bind: String,
    /// Where unauthenticated requests are redirected.
    pub redirect_url: String,
    /// Direct shared secret; prefer the env var.
    pub secret: Option<String>,
    /// Environment variable holding the shared secret (default: "AUTH_SECRET").
    pub secret_env: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            redirect_url: String::new(),
            secret: None,
            secret_env: "AUTH_SECRET".to_string(),
        }
    }
}
