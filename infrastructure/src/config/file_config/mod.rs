//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Credentials may be given
//! directly or through a named environment variable; [`FileConfig::resolve`]
//! turns them into the domain's [`GatewayConfig`].

mod logging;
mod providers;
mod search;
mod server;

pub use logging::FileLoggingConfig;
pub use providers::{FileAnthropicConfig, FileDeepSeekConfig, FileProvidersConfig};
pub use search::FileSearchConfig;
pub use server::FileServerConfig;

use relay_domain::{
    AnthropicProviderConfig, DeepSeekProviderConfig, GatewayConfig, ProviderConfig,
    ServerSettings, TavilySearchConfig,
};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener and access gate
    pub server: FileServerConfig,
    /// Model backends
    pub providers: FileProvidersConfig,
    /// Search backend
    pub search: FileSearchConfig,
    /// Exchange log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Resolve credentials against the process environment.
    pub fn resolve(&self) -> GatewayConfig {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve credentials using `lookup` for environment variables.
    ///
    /// A direct value wins over the variable. Blank values count as unset.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> GatewayConfig {
        let credential = |direct: &Option<String>, env_name: &str| {
            direct
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .or_else(|| {
                    lookup(env_name)
                        .map(|v| v.trim().to_string())
                        .filter(|v| !v.is_empty())
                })
        };

        let anthropic = &self.providers.anthropic;
        let deepseek = &self.providers.deepseek;

        GatewayConfig {
            server: ServerSettings {
                bind: self.server.bind.clone(),
                secret: credential(&self.server.secret, &self.server.secret_env),
                redirect_url: self.server.redirect_url.trim().to_string(),
            },
            providers: ProviderConfig {
                anthropic: AnthropicProviderConfig {
                    api_key: credential(&anthropic.api_key, &anthropic.api_key_env),
                    base_url: anthropic.base_url.clone(),
                    model: anthropic.model.clone(),
                    max_tokens: anthropic.max_tokens,
                    api_version: anthropic.api_version.clone(),
                },
                deepseek: DeepSeekProviderConfig {
                    api_key: credential(&deepseek.api_key, &deepseek.api_key_env),
                    base_url: deepseek.base_url.clone(),
                    model: deepseek.model.clone(),
                    max_tokens: deepseek.max_tokens,
                },
                search: TavilySearchConfig {
                    api_key: credential(&self.search.api_key, &self.search.api_key_env),
                    base_url: self.search.base_url.clone(),
                },
            },
        }
    }
}
