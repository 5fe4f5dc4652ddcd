//! Top-level router combining API and board routes.
//!
//! # Route Structure
//!
//! - `GET  /`        - HTML board
//! - `POST /`        - Board form submission
//! - `GET  /events`  - Live countdown feed
//! - `GET  /health`  - Health check
//! - `/api/*`        - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Sessions** - Cookie-keyed board per browser, on every route except `/health`
//! - **Rate limiting** - Per-IP token bucket on submit routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{session, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let boards = Router::new()
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(boards)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
