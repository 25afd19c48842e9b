//! Ports (interfaces) for external dependencies
//!
//! Ports define the boundaries between the application and the outside world.
//! Adapters in the infrastructure layer implement these ports.

pub mod exchange_logger;
pub mod model_client;
pub mod search_client;
