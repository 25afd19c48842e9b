//! Error types for the model adapters
//!
//! The `Display` text of each variant is exactly what the caller sees when a
//! model call fails, so the wording is part of the gateway's behavior.

use thiserror::Error;

/// Errors that can occur while calling a model backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelCallError {
    #[error("{backend} API key missing or undefined")]
    MissingApiKey { backend: &'static str },

    #[error("{backend} call exception: {message}")]
    Transport {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} response JSON parse error: {message}")]
    Parse {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} API error {status}: {message}")]
    Api {
        backend: &'static str,
        status: u16,
        message: String,
    },

    #[error("No response from {backend}")]
    NoResponse { backend: &'static str },

    #[error("Unexpected {backend} response format ({detail})")]
    UnexpectedFormat {
        backend: &'static str,
        detail: &'static str,
    },
}
