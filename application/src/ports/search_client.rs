//! Search client port
//!
//! Unlike [`ModelClient`](super::model_client::ModelClient), a search
//! failure is reported as an error and aborts the request.

use async_trait::async_trait;
use relay_domain::SearchDigest;
use thiserror::Error;

/// Errors that can occur while querying the search backend
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search API key missing")]
    MissingApiKey,

    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search API returned status {status}")]
    Status { status: u16 },

    #[error("Failed to parse search results: {0}")]
    Decode(String),
}

/// Web search backend
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search for `query` and format the top hits as a digest.
    ///
    /// An empty result set is not an error: it yields the "no results" digest.
    async fn search(&self, query: &str) -> Result<SearchDigest, SearchError>;
}
