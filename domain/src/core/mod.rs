//! Core domain concepts shared across the gateway.
//!
//! - [`model::ModelSelector`]: which backend answers a query
//! - [`query::Query`]: a validated, sanitized caller query
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
