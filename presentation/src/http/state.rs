use relay_application::HandleQueryUseCase;
use std::sync::Arc;

/// Shared-secret check applied to every request.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: Option<String>,
    redirect_url: String,
}

impl AccessGate {
    pub fn new(secret: Option<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            secret,
            redirect_url: redirect_url.into(),
        }
    }

    /// Exact match against the configured secret. With no secret configured
    /// nothing is admitted.
    pub fn admits(&self, candidate: Option<&str>) -> bool {
        match (self.secret.as_deref(), candidate) {
            (Some(expected), Some(given)) => !given.is_empty() && given == expected,
            _ => false,
        }
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }
}

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub use_case: HandleQueryUseCase,
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(use_case: HandleQueryUseCase, gate: AccessGate) -> Self {
        Self {
            use_case,
            gate: Arc::new(gate),
        }
    }
}
