//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::session::SessionRegistry;

/// Service wired to the in-memory repository. One per browser session.
pub type BoardService = LinkService<InMemoryLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionRegistry>) -> Self {
        Self { sessions }
    }
}
