//! Domain layer for search-relay
//!
//! This crate contains the request-scoped value objects and the pure policy
//! that drives the gateway. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Query
//!
//! A caller's text, validated (non-empty, at most 5000 characters) and
//! HTML-escaped exactly once before it reaches any backend.
//!
//! ## Augmentation
//!
//! When a model's reply disclaims knowledge, the gateway searches the web
//! with the original query and asks the same model again with the
//! [`SearchDigest`] appended. [`should_augment`] is the trigger.

pub mod augmentation;
pub mod config;
pub mod core;
pub mod providers;
pub mod text;
pub mod util;

// Re-export commonly used types
pub use augmentation::{
    digest::{EnrichedQuery, NO_SEARCH_RESULTS, SEARCH_RESULTS_HEADER, SearchDigest, SearchHit},
    trigger::{TRIGGER_PHRASES, should_augment, should_augment_opt},
};
pub use config::{ConfigIssue, ConfigIssueCode, GatewayConfig, ServerSettings, Severity};
pub use core::{
    error::DomainError,
    model::ModelSelector,
    query::{MAX_QUERY_CHARS, Query, QueryError},
};
pub use providers::{
    AnthropicProviderConfig, DeepSeekProviderConfig, ProviderConfig, TavilySearchConfig,
};
pub use text::escape_html;
