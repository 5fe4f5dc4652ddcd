//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::domain::entities::LinkEntry;
use crate::domain::repositories::LinkRepository;

/// Process-memory list of link entries, newest at the front.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    entries: RwLock<VecDeque<LinkEntry>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn prepend(&self, entry: LinkEntry) -> bool {
        let mut entries = self.entries.write().await;

        if entries.iter().any(|e| e.short_code() == entry.short_code()) {
            return false;
        }

        entries.push_front(entry);
        true
    }

    async fn contains_code(&self, code: &str) -> bool {
        self.entries
            .read()
            .await
            .iter()
            .any(|e| e.short_code() == code)
    }

    async fn find_by_code(&self, code: &str) -> Option<LinkEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.short_code() == code)
            .cloned()
    }

    async fn list(&self) -> Vec<LinkEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}
