//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, code generation and countdown tasks,
//! and give HTTP handlers and the console a single entry point.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Submission, listing and countdowns

pub mod services;
