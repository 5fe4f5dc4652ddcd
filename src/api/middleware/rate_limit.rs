//! Per-IP rate limiting for submissions.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Sustained submissions allowed per second and client IP.
const SUBMIT_PER_SECOND: u64 = 5;

/// Submissions a client may burst before being throttled.
const SUBMIT_BURST: u32 = 30;

const _: () = assert!(SUBMIT_PER_SECOND > 0 && SUBMIT_BURST > 0);

/// Creates the rate limiter applied to submit routes.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are
/// the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/links", post(submit_handler))
///     .layer(rate_limit::submit_layer());
/// ```
pub fn submit_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(SUBMIT_PER_SECOND)
            .burst_size(SUBMIT_BURST)
            .finish()
            .expect("quota constants are checked non-zero at compile time"),
    );

    GovernorLayer::new(governor_conf)
}
