//! Board route configuration.

use crate::api::middleware::rate_limit;
use crate::state::AppState;
use crate::web::handlers::{board_handler, events_handler, submit_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Board routes.
///
/// # Endpoints
///
/// - `GET  /`       - Submit form and entry list
/// - `POST /`       - Form submission (rate limited), redirects back to `/`
/// - `GET  /events` - Server-sent countdown ticks for the board
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(board_handler).merge(post(submit_form_handler).layer(rate_limit::submit_layer())),
        )
        .route("/events", get(events_handler))
}
