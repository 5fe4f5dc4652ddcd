//! API route configuration.

use crate::api::handlers::{link_handler, list_handler, submit_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET  /links`         - List entries, newest first
/// - `POST /links`         - Submit text as a new entry (rate limited)
/// - `GET  /links/{code}`  - Single entry with its countdown
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/links",
            get(list_handler).merge(post(submit_handler).layer(rate_limit::submit_layer())),
        )
        .route("/links/{code}", get(link_handler))
}
