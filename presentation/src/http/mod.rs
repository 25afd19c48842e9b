//! HTTP shell
//!
//! One route, `/`, behind the access gate:
//!
//! | Method | Response |
//! |--------|----------|
//! | `GET`  | query form page |
//! | `POST` | model answer as `text/plain` |
//! | other  | `405 Method not allowed` |
//!
//! Requests without the right `?secret=` get a `302` to the configured
//! redirect URL before any of this runs.

mod auth;
mod handlers;
mod page;
mod state;

pub use auth::require_secret;
pub use handlers::QueryForm;
pub use page::FORM_PAGE;
pub use state::{AccessGate, AppState};

use axum::{Router, middleware, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::show_form)
                .head(handlers::method_not_allowed)
                .post(handlers::submit)
                .fallback(handlers::method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_secret))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C, graceful shutdown disabled: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
