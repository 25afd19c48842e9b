//! Use cases (application services)

pub mod handle_query;
