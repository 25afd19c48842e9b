//! Access gate middleware.

use super::state::AppState;
use axum::{
    extract::{Query, Request, State},
    http::{StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// First `secret` parameter of the query string, if any.
fn secret_param(uri: &Uri) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs
        .into_iter()
        .find(|(name, _)| name == "secret")
        .map(|(_, value)| value)
}

/// Redirect every request whose `?secret=` does not match.
pub async fn require_secret(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.gate.admits(secret_param(request.uri()).as_deref()) {
        return next.run(request).await;
    }

    debug!("Rejected {} {}: bad or missing secret", request.method(), request.uri().path());
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.gate.redirect_url().to_string())],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(uri: &str) -> Option<String> {
        secret_param(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn test_first_secret_wins() {
        assert_eq!(secret("/?secret=a&secret=b").as_deref(), Some("a"));
        assert_eq!(secret("/?x=1&secret=b&secret=a").as_deref(), Some("b"));
    }

    #[test]
    fn test_secret_is_percent_decoded() {
        assert_eq!(secret("/?secret=a%26b").as_deref(), Some("a&b"));
    }

    #[test]
    fn test_missing_secret() {
        assert_eq!(secret("/"), None);
        assert_eq!(secret("/?other=1"), None);
    }
}
