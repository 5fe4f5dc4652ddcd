//! Repository trait for link entries.

use crate::domain::entities::LinkEntry;
use async_trait::async_trait;

/// Ordered store of link entries, newest first.
///
/// Entries are only ever prepended; there is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - process-memory list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts `entry` at the head of the list.
    ///
    /// Returns `false` without inserting if an entry with the same short code
    /// is already held. The check and the insert happen atomically.
    async fn prepend(&self, entry: LinkEntry) -> bool;

    /// Returns true if an entry with this short code is held.
    async fn contains_code(&self, code: &str) -> bool;

    /// Finds an entry by short code.
    async fn find_by_code(&self, code: &str) -> Option<LinkEntry>;

    /// Returns every entry, newest first.
    async fn list(&self) -> Vec<LinkEntry>;

    /// Number of held entries.
    async fn count(&self) -> usize;
}
