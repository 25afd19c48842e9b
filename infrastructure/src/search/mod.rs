//! Web search adapters.

mod tavily;

pub use tavily::{SEARCH_DEPTH, SEARCH_MAX_RESULTS, TavilySearchClient};
