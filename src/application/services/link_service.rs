//! Link submission and countdown tracking.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::json;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::countdown::{CountdownState, remaining};
use crate::domain::entities::LinkEntry;
use crate::domain::expiry_clock::{ExpiryClockHandle, TICK_INTERVAL};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{Base62Generator, CodeGenerator};

/// An entry together with its latest countdown.
#[derive(Debug, Clone)]
pub struct LinkSnapshot {
    pub entry: LinkEntry,
    pub countdown: CountdownState,
}

/// The single controller for the link board.
///
/// Owns the entry list (through the repository), the code generator, the
/// wall-clock source, the public origin, and one running [`ExpiryClockHandle`]
/// per entry. Dropping the service drops every handle, which cancels every
/// countdown task.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    origin: String,
    clocks: Mutex<HashMap<String, ExpiryClockHandle>>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a service using the base62 generator and the system clock.
    ///
    /// `origin` is the scheme+host+port prefix for fabricated short URLs.
    pub fn new(repository: Arc<L>, origin: impl Into<String>) -> Self {
        Self {
            repository,
            generator: Arc::new(Base62Generator::default()),
            clock: Arc::new(SystemClock),
            origin: origin.into(),
            clocks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_code_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Submits pasted text as a new entry.
    ///
    /// Blank (or whitespace-only) input is silently ignored and returns `None`.
    /// Otherwise the trimmed text is stored under a code not held by any
    /// current entry, expiring 30 minutes from now, at the head of the list,
    /// and a countdown task is started for it.
    pub async fn submit(&self, input: &str) -> Option<LinkEntry> {
        let original_url = input.trim();
        if original_url.is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }

        let entry = loop {
            let code = self.unique_code().await;
            let entry = LinkEntry::new(original_url, code, &self.origin, self.clock.now());

            if self.repository.prepend(entry.clone()).await {
                break entry;
            }

            debug!(
                short_code = entry.short_code(),
                "Short code taken by a concurrent submission, retrying"
            );
        };

        let handle =
            ExpiryClockHandle::spawn(entry.expires_at(), self.clock.clone(), TICK_INTERVAL);
        self.lock_clocks()
            .insert(entry.short_code().to_string(), handle);

        info!(
            short_code = entry.short_code(),
            short_url = entry.short_url(),
            expires_at = %entry.expires_at(),
            "Created short link"
        );

        Some(entry)
    }

    /// Draws codes until one is not held by any current entry.
    ///
    /// Unbounded: with 62^4 codes against a short-lived list this ends almost
    /// always on the first draw.
    async fn unique_code(&self) -> String {
        loop {
            let code = self.generator.generate();

            if !self.repository.contains_code(&code).await {
                return code;
            }

            debug!(short_code = %code, "Short code collision, retrying");
        }
    }

    /// Returns every entry, newest first, with its latest countdown.
    pub async fn entries(&self) -> Vec<LinkSnapshot> {
        let entries = self.repository.list().await;
        let clocks = self.lock_clocks();

        entries
            .into_iter()
            .map(|entry| self.snapshot(&clocks, entry))
            .collect()
    }

    /// Retrieves one entry by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry holds this code.
    pub async fn entry(&self, code: &str) -> Result<LinkSnapshot, AppError> {
        let entry = self
            .repository
            .find_by_code(code)
            .await
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let clocks = self.lock_clocks();
        Ok(self.snapshot(&clocks, entry))
    }

    /// Number of held entries.
    pub async fn count(&self) -> usize {
        self.repository.count().await
    }

    /// Number of countdown tasks that have not yet reached expiry.
    pub fn active_clocks(&self) -> usize {
        self.lock_clocks()
            .values()
            .filter(|handle| handle.is_running())
            .count()
    }

    /// One receiver per entry, keyed by short code, notified on every tick.
    ///
    /// Receivers of entries that already expired yield their final state and
    /// then report the sender closed.
    pub fn countdown_feeds(&self) -> Vec<(String, watch::Receiver<CountdownState>)> {
        self.lock_clocks()
            .iter()
            .map(|(code, handle)| (code.clone(), handle.subscribe()))
            .collect()
    }

    /// Scheme+host+port prefix of every short URL this service fabricates.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn snapshot(
        &self,
        clocks: &HashMap<String, ExpiryClockHandle>,
        entry: LinkEntry,
    ) -> LinkSnapshot {
        let countdown = clocks
            .get(entry.short_code())
            .map(ExpiryClockHandle::current)
            .unwrap_or_else(|| remaining(self.clock.now(), entry.expires_at()));

        LinkSnapshot { entry, countdown }
    }

    fn lock_clocks(&self) -> MutexGuard<'_, HashMap<String, ExpiryClockHandle>> {
        self.clocks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::memory::InMemoryLinkRepository;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::collections::{HashSet, VecDeque};

    const ORIGIN: &str = "http://localhost:3000";

    struct ScriptedGenerator {
        codes: Mutex<VecDeque<&'static str>>,
    }

    impl ScriptedGenerator {
        fn new(codes: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                codes: Mutex::new(codes.iter().copied().collect()),
            })
        }
    }

    impl CodeGenerator for ScriptedGenerator {
        fn generate(&self) -> String {
            self.codes
                .lock()
                .unwrap()
                .pop_front()
                .expect("generator script exhausted")
                .to_string()
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_submit_blank_is_noop() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_contains_code().times(0);
        mock_repo.expect_prepend().times(0);

        let service = LinkService::new(Arc::new(mock_repo), ORIGIN);

        assert!(service.submit("").await.is_none());
        assert!(service.submit("   \t\n ").await.is_none());
        assert_eq!(service.active_clocks(), 0);
    }

    #[tokio::test]
    async fn test_submit_trims_and_sets_expiry() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_contains_code().times(1).returning(|_| false);
        mock_repo
            .expect_prepend()
            .withf(|entry| entry.original_url() == "https://example.com")
            .times(1)
            .returning(|_| true);

        let service = LinkService::new(Arc::new(mock_repo), ORIGIN)
            .with_clock(Arc::new(ManualClock::new(t0())))
            .with_code_generator(ScriptedGenerator::new(&["Ab12"]));

        let entry = service.submit("  https://example.com  ").await.unwrap();

        assert_eq!(entry.original_url(), "https://example.com");
        assert_eq!(entry.short_code(), "Ab12");
        assert_eq!(entry.short_url(), "http://localhost:3000/Ab12");
        assert_eq!(entry.created_at(), t0());
        assert_eq!(entry.expires_at(), t0() + Duration::milliseconds(1_800_000));
        assert_eq!(service.active_clocks(), 1);
    }

    #[tokio::test]
    async fn test_submit_retries_on_code_collision() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_contains_code()
            .times(3)
            .returning(|code| code == "aaaa");
        mock_repo
            .expect_prepend()
            .withf(|entry| entry.short_code() == "bbbb")
            .times(1)
            .returning(|_| true);

        let service = LinkService::new(Arc::new(mock_repo), ORIGIN)
            .with_code_generator(ScriptedGenerator::new(&["aaaa", "aaaa", "bbbb"]));

        let entry = service.submit("https://example.com").await.unwrap();
        assert_eq!(entry.short_code(), "bbbb");
    }

    #[tokio::test]
    async fn test_submit_retries_when_prepend_loses_race() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_contains_code().times(2).returning(|_| false);
        mock_repo
            .expect_prepend()
            .times(2)
            .returning(|entry| entry.short_code() == "cccc");

        let service = LinkService::new(Arc::new(mock_repo), ORIGIN)
            .with_code_generator(ScriptedGenerator::new(&["race", "cccc"]));

        let entry = service.submit("https://example.com").await.unwrap();
        assert_eq!(entry.short_code(), "cccc");
    }

    #[tokio::test]
    async fn test_generated_code_never_matches_held_entries() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        let held = ["h001", "h002", "h003", "h004"];
        for code in held {
            assert!(repo.prepend(LinkEntry::new("https://held.example", code, ORIGIN, t0())).await);
        }

        let service = LinkService::new(repo.clone(), ORIGIN)
            .with_code_generator(ScriptedGenerator::new(&["h003", "h001", "h004", "new1"]));

        let entry = service.submit("https://fresh.example").await.unwrap();

        assert_eq!(entry.short_code(), "new1");
        assert!(!held.contains(&entry.short_code()));
        assert_eq!(repo.count().await, 5);
    }

    #[tokio::test]
    async fn test_entries_newest_first_with_distinct_codes() {
        let service = LinkService::new(Arc::new(InMemoryLinkRepository::new()), ORIGIN);

        service.submit("https://first.example").await.unwrap();
        service.submit("https://second.example").await.unwrap();

        let entries = service.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry.original_url(), "https://second.example");
        assert_eq!(entries[1].entry.original_url(), "https://first.example");

        let codes: HashSet<&str> = entries.iter().map(|s| s.entry.short_code()).collect();
        assert_eq!(codes.len(), 2);
    }

    #[tokio::test]
    async fn test_entry_snapshot_uses_clock() {
        let clock = Arc::new(ManualClock::new(t0()));
        let service = LinkService::new(Arc::new(InMemoryLinkRepository::new()), ORIGIN)
            .with_clock(clock.clone());

        let entry = service.submit("https://example.com").await.unwrap();
        let snapshot = service.entry(entry.short_code()).await.unwrap();

        assert_eq!(snapshot.entry, entry);
        assert_eq!(snapshot.countdown.total_ms, 1_800_000);
        assert_eq!(snapshot.countdown.display().to_string(), "30:00");
    }

    #[tokio::test]
    async fn test_entry_without_clock_falls_back_to_computation() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.prepend(LinkEntry::new("https://old.example", "old1", ORIGIN, t0()))
            .await;

        let clock = Arc::new(ManualClock::new(t0() + Duration::hours(1)));
        let service = LinkService::new(repo, ORIGIN).with_clock(clock);

        let snapshot = service.entry("old1").await.unwrap();
        assert_eq!(snapshot.countdown.display().to_string(), "Expired");
    }

    #[tokio::test]
    async fn test_entry_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "nope")
            .times(1)
            .returning(|_| None);

        let service = LinkService::new(Arc::new(mock_repo), ORIGIN);

        let result = service.entry("nope").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_clock_no_longer_active() {
        let clock = Arc::new(ManualClock::new(t0()));
        let service = LinkService::new(Arc::new(InMemoryLinkRepository::new()), ORIGIN)
            .with_clock(clock.clone());

        service.submit("https://example.com").await.unwrap();
        assert_eq!(service.active_clocks(), 1);

        clock.advance(Duration::minutes(31));
        tokio::time::sleep(TICK_INTERVAL * 2).await;

        assert_eq!(service.active_clocks(), 0);
        let entries = service.entries().await;
        assert_eq!(entries[0].countdown.display().to_string(), "Expired");
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_feeds_follow_each_entry() {
        let clock = Arc::new(ManualClock::new(t0()));
        let service = LinkService::new(Arc::new(InMemoryLinkRepository::new()), ORIGIN)
            .with_clock(clock.clone())
            .with_code_generator(ScriptedGenerator::new(&["aaaa", "bbbb"]));

        service.submit("https://a.example").await.unwrap();
        service.submit("https://b.example").await.unwrap();

        let mut feeds = service.countdown_feeds();
        feeds.sort_by(|a, b| a.0.cmp(&b.0));
        let codes: Vec<&str> = feeds.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, ["aaaa", "bbbb"]);

        clock.advance(Duration::seconds(5));
        let (_, rx) = &mut feeds[0];
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().display().to_string(), "29:55");
    }
}
