//! Axum router wiring.
//!
//! Three JSON routes; everything else falls through to static assets under
//! the configured public directory. Homepage views are counted in a layer
//! so the static fallback still serves the page when the store is down.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.cfg().public_dir);
    Router::new()
        .route("/api/time", get(handlers::time))
        .route("/api/demo-write", post(handlers::demo_write))
        .route("/api/metrics", get(handlers::metrics))
        .fallback_service(assets)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::track_pageview,
        ))
        .with_state(state)
}
