//! Presentation layer for search-relay
//!
//! This crate contains the HTTP shell (access gate, form page, query
//! endpoint) and the CLI definitions for the binary.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{AccessGate, AppState, build_router, serve};
