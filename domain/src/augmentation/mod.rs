//! Search augmentation policy.
//!
//! A model reply that disclaims knowledge triggers one web search with the
//! original query; the results are appended to the query and the same model
//! is asked again. This module holds the pure parts of that workflow:
//!
//! - [`trigger`]: decides whether a reply is insufficient
//! - [`digest`]: formats search hits and builds the enriched prompt

pub mod digest;
pub mod trigger;
