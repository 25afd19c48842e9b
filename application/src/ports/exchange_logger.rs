//! Port for structured exchange logging.
//!
//! Records each step of a request (model reply, search trigger, digest,
//! re-query) as a machine-readable event. This is separate from `tracing`:
//! tracing carries operator diagnostics, the exchange log carries the full
//! text that flowed between the gateway and its backends.

use serde_json::Value;

/// A structured exchange event.
pub struct ExchangeEvent {
    /// Event type identifier (e.g., "model_reply", "search_digest").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExchangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for exchange events.
///
/// `log` is synchronous and infallible; a failing sink must never change the
/// response a caller receives.
pub trait ExchangeLogger: Send + Sync {
    fn log(&self, event: ExchangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExchangeLogger;

impl ExchangeLogger for NoExchangeLogger {
    fn log(&self, _event: ExchangeEvent) {}
}
