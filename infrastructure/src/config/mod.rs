//! Configuration file loading for search-relay
//!
//! Sources are merged with this priority (highest to lowest):
//!
//! 1. `RELAY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./relay.toml` or `./.relay.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/search-relay/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnthropicConfig, FileConfig, FileDeepSeekConfig, FileLoggingConfig, FileProvidersConfig,
    FileSearchConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
