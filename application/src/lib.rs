//! Application layer for search-relay
//!
//! This crate contains the port definitions and the query-handling use case.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    model_client::{ModelClient, ModelClients},
    search_client::{SearchClient, SearchError},
};
pub use use_cases::handle_query::{
    EMPTY_REQUERY_FALLBACK, HandleQueryError, HandleQueryInput, HandleQueryUseCase, QueryAnswer,
    UNKNOWN_MODEL_TEXT,
};
