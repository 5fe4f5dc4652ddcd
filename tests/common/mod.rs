#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use linkdrop::api::middleware::session;
use linkdrop::prelude::*;
use std::sync::Arc;

pub const ORIGIN: &str = "http://s.test";

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn create_test_service(clock: Arc<dyn Clock>) -> Arc<BoardService> {
    Arc::new(LinkService::new(Arc::new(InMemoryLinkRepository::new()), ORIGIN).with_clock(clock))
}

pub fn create_test_state() -> AppState {
    create_test_state_with_clock(Arc::new(SystemClock))
}

pub fn create_test_state_with_clock(clock: Arc<dyn Clock>) -> AppState {
    AppState::new(Arc::new(SessionRegistry::new(ORIGIN).with_clock(clock)))
}

/// Serves `routes` behind the session middleware for one cookie-keeping client.
pub fn board_client(routes: Router<AppState>, state: AppState) -> TestServer {
    let app = routes
        .route_layer(middleware::from_fn_with_state(state.clone(), session::layer))
        .with_state(state);

    TestServer::builder().save_cookies().build(app).unwrap()
}
