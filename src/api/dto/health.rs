//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Board sessions currently held in memory.
    pub sessions: usize,
    /// Entries across every session.
    pub entries: usize,
    /// Countdown tasks that have not yet reached expiry.
    pub active_clocks: usize,
}
