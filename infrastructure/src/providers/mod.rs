//! Model backend adapters.
//!
//! Both backends share one request pipeline ([`http::HttpModelClient`]) and
//! differ only in endpoint, auth headers, and how the reply text is pulled
//! out of the response body ([`http::ChatBackend`]).
//!
//! | Selector | Backend | Endpoint | Auth |
//! |----------|---------|----------|------|
//! | `claude` | [`anthropic::AnthropicBackend`] | `/v1/messages` | `x-api-key` + `anthropic-version` |
//! | `deepseek` | [`deepseek::DeepSeekBackend`] | `/v1/chat/completions` | `Authorization: Bearer` |

pub mod anthropic;
pub mod deepseek;
pub mod error;
pub mod http;

pub use error::ModelCallError;

/// Primary model client
pub type AnthropicClient = http::HttpModelClient<anthropic::AnthropicBackend>;

/// Secondary model client
pub type DeepSeekClient = http::HttpModelClient<deepseek::DeepSeekBackend>;
