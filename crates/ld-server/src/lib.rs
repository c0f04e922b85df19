//! Log digest HTTP API server (Axum).
//!
//! Accepts raw log text, uploads or a path under the allowed root, and
//! returns the reduced digest together with the covered time window.

pub mod error;
pub mod routes;
pub mod source;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with the default configuration.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::digest_routes())
        .with_state(state)
}
