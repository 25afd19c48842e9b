//! Resolved gateway configuration and its validation.
//!
//! [`GatewayConfig`] is built once at process start and passed explicitly to
//! every component. Nothing reads credentials from ambient global state.

use crate::providers::ProviderConfig;

/// Default listen address for the HTTP shell.
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// HTTP shell settings.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind: String,
    /// Shared secret expected in the `secret` query parameter.
    /// `None` rejects every request.
    pub secret: Option<String>,
    /// Where unauthenticated callers are sent.
    pub redirect_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            secret: None,
            redirect_url: String::new(),
        }
    }
}

/// Everything the gateway needs to run.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub server: ServerSettings,
    pub providers: ProviderConfig,
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the gateway cannot serve requests.
    Error,
    /// Non-fatal: some requests will degrade to diagnostics.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// No shared secret: every request is redirected.
    MissingSecret,
    /// No redirect target for unauthenticated requests.
    MissingRedirectUrl,
    /// Redirect target is not an absolute http(s) URL.
    InvalidRedirectUrl { value: String },
    /// A backend credential is absent.
    MissingCredential { backend: &'static str },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn new(severity: Severity, code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
        }
    }
}

impl GatewayConfig {
    /// Validate the resolved configuration, returning all detected issues.
    ///
    /// Missing backend credentials are warnings: the affected requests still
    /// get a diagnostic reply (model) or a 500 (search).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.secret.is_none() {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                ConfigIssueCode::MissingSecret,
                "server.secret is not set; every request will be redirected",
            ));
        }

        let redirect = self.server.redirect_url.trim();
        if redirect.is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::MissingRedirectUrl,
                "server.redirect_url is required",
            ));
        } else if !(redirect.starts_with("http://") || redirect.starts_with("https://")) {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::InvalidRedirectUrl {
                    value: redirect.to_string(),
                },
                format!("server.redirect_url: '{}' is not an http(s) URL", redirect),
            ));
        }

        let credentials = [
            ("anthropic", self.providers.anthropic.api_key.is_some()),
            ("deepseek", self.providers.deepseek.api_key.is_some()),
            ("tavily", self.providers.search.api_key.is_some()),
        ];
        for (backend, present) in credentials {
            if !present {
                issues.push(ConfigIssue::new(
                    Severity::Warning,
                    ConfigIssueCode::MissingCredential { backend },
                    format!("no API key configured for {}", backend),
                ));
            }
        }

        issues
    }

    /// Whether any issue prevents the gateway from starting
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
