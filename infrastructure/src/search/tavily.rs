//! Tavily search adapter.
//!
//! Sends one `POST /search` per call with the API key in the JSON body and
//! formats the hits with [`SearchDigest::from_hits`]. Every failure is
//! returned as a [`SearchError`]; nothing is swallowed here.

use async_trait::async_trait;
use relay_application::ports::search_client::{SearchClient, SearchError};
use relay_domain::{SearchDigest, SearchHit, TavilySearchConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hits requested per search.
pub const SEARCH_MAX_RESULTS: u32 = 5;

/// Tavily search depth.
pub const SEARCH_DEPTH: &str = "basic";

#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'static str,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Option<Vec<TavilyResult>>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    title: Option<String>,
    content: Option<String>,
}

pub struct TavilySearchClient {
    config: TavilySearchConfig,
    http: reqwest::Client,
}

impl TavilySearchClient {
    pub fn new(config: TavilySearchConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchClient for TavilySearchClient {
    async fn search(&self, query: &str) -> Result<SearchDigest, SearchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SearchError::MissingApiKey)?;

        let body = TavilySearchRequest {
            api_key,
            query,
            search_depth: SEARCH_DEPTH,
            max_results: SEARCH_MAX_RESULTS,
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: TavilySearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        let hits: Vec<SearchHit> = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| SearchHit {
                title: r.title,
                content: r.content,
            })
            .collect();
        debug!("Tavily returned {} results", hits.len());

        Ok(SearchDigest::from_hits(hits))
    }
}
