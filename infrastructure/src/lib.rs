//! Infrastructure layer for search-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod search;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlExchangeLogger;
pub use providers::{
    AnthropicClient, DeepSeekClient, ModelCallError,
    anthropic::AnthropicBackend,
    deepseek::DeepSeekBackend,
    http::{ChatBackend, HttpModelClient},
};
pub use search::TavilySearchClient;
