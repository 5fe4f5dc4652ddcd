//! Link entry entity.

use chrono::{DateTime, Duration, Utc};

/// Lifetime of every entry. Never extended or renewed.
pub const LINK_TTL: Duration = Duration::minutes(30);

/// A pasted URL paired with its generated short code.
///
/// Entries are immutable: fields are only readable through getters and
/// `expires_at` is always `created_at + LINK_TTL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    original_url: String,
    short_code: String,
    short_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl LinkEntry {
    /// Builds an entry created at `created_at`.
    ///
    /// `origin` is the scheme+host+port prefix of the fabricated short URL.
    /// Trailing slashes on it are ignored.
    pub fn new(
        original_url: impl Into<String>,
        short_code: impl Into<String>,
        origin: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let short_code = short_code.into();
        let short_url = format!("{}/{}", origin.trim_end_matches('/'), short_code);

        Self {
            original_url: original_url.into(),
            short_code,
            short_url,
            created_at,
            expires_at: created_at + LINK_TTL,
        }
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_entry_creation() {
        let entry = LinkEntry::new("https://example.com", "aZ09", "http://localhost:3000", t0());

        assert_eq!(entry.original_url(), "https://example.com");
        assert_eq!(entry.short_code(), "aZ09");
        assert_eq!(entry.short_url(), "http://localhost:3000/aZ09");
        assert_eq!(entry.created_at(), t0());
    }

    #[test]
    fn test_expires_exactly_thirty_minutes_later() {
        let entry = LinkEntry::new("https://example.com", "abcd", "http://s.test", t0());
        assert_eq!(
            (entry.expires_at() - entry.created_at()).num_milliseconds(),
            1_800_000
        );
    }

    #[test]
    fn test_origin_trailing_slash_ignored() {
        let entry = LinkEntry::new("https://example.com", "abcd", "https://s.test/", t0());
        assert_eq!(entry.short_url(), "https://s.test/abcd");
    }
}
