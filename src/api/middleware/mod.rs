//! HTTP middleware for request processing and protection.

pub mod rate_limit;
pub mod session;
pub mod tracing;
