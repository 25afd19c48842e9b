//! Model client port
//!
//! Defines how the application sends a prompt to an LLM backend.

use async_trait::async_trait;
use relay_domain::ModelSelector;
use std::sync::Arc;

/// A single-shot LLM backend.
///
/// `invoke` never fails: transport errors, bad status codes, missing
/// credentials and malformed bodies all come back as human-readable
/// diagnostic text in place of an answer. The orchestrator always has a
/// string to inspect and return.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send `prompt` as the sole user message and return the reply text
    async fn invoke(&self, prompt: &str) -> String;
}

/// The closed set of model backends, one per known [`ModelSelector`].
#[derive(Clone)]
pub struct ModelClients {
    primary: Arc<dyn ModelClient>,
    secondary: Arc<dyn ModelClient>,
}

impl ModelClients {
    pub fn new(primary: Arc<dyn ModelClient>, secondary: Arc<dyn ModelClient>) -> Self {
        Self { primary, secondary }
    }

    /// Resolve the client for a selector; `None` for [`ModelSelector::Unknown`].
    pub fn get(&self, selector: &ModelSelector) -> Option<&dyn ModelClient> {
        match selector {
            ModelSelector::Primary => Some(self.primary.as_ref()),
            ModelSelector::Secondary => Some(self.secondary.as_ref()),
            ModelSelector::Unknown(_) => None,
        }
    }
}
