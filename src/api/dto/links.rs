//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::LinkSnapshot;

/// Request to submit pasted text as a new entry.
///
/// The text is not validated as a URL; blank text is a no-op.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub url: String,
}

/// One entry with its countdown as last published by its clock.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub remaining_ms: i64,
    /// `MM:SS`, or `Expired` once the remaining time is zero or less.
    pub countdown: String,
    pub expired: bool,
}

impl From<LinkSnapshot> for LinkResponse {
    fn from(snapshot: LinkSnapshot) -> Self {
        let LinkSnapshot { entry, countdown } = snapshot;

        Self {
            original_url: entry.original_url().to_string(),
            short_code: entry.short_code().to_string(),
            short_url: entry.short_url().to_string(),
            created_at: entry.created_at(),
            expires_at: entry.expires_at(),
            remaining_ms: countdown.total_ms,
            countdown: countdown.display().to_string(),
            expired: countdown.is_expired(),
        }
    }
}

/// All held entries, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkResponse>,
}
