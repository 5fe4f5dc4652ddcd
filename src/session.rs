//! Per-browser boards.
//!
//! Each browser session gets its own [`BoardService`]: its own entry list,
//! its own code uniqueness scope and its own countdown tasks. Sessions are
//! identified by the `linkdrop_session` cookie and live only in process
//! memory.
//!
//! A session untouched for longer than [`SESSION_IDLE_LIMIT`] holds only
//! entries that expired long ago, so it is discarded the next time any
//! session is opened.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::application::services::LinkService;
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::state::BoardService;
use crate::utils::code_generator::{Base62Generator, CodeGenerator};

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "linkdrop_session";

/// Idle time after which a session is discarded. Four link lifetimes.
pub const SESSION_IDLE_LIMIT: Duration = Duration::hours(2);

const SESSION_ID_LENGTH: usize = 32;

/// A session's board, placed in request extensions by the session middleware.
#[derive(Clone)]
pub struct BoardSession {
    pub id: String,
    pub board: Arc<BoardService>,
}

/// Process-wide counters across every open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    pub sessions: usize,
    pub entries: usize,
    pub active_clocks: usize,
}

struct SessionSlot {
    board: Arc<BoardService>,
    last_seen: DateTime<Utc>,
}

/// Map from session id to that session's board.
pub struct SessionRegistry {
    origin: String,
    clock: Arc<dyn Clock>,
    ids: Base62Generator,
    sessions: Mutex<HashMap<String, SessionSlot>>,
}

impl SessionRegistry {
    /// `origin` is handed to every board created by this registry.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            clock: Arc::new(SystemClock),
            ids: Base62Generator::new(SESSION_ID_LENGTH),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Clock used for idle tracking and by every board created afterwards.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the board for `presented`, or a fresh board under a new id.
    ///
    /// The boolean is true when a new session was created, in which case the
    /// caller must hand the new id back to the client. Unknown ids are never
    /// adopted.
    pub fn open(&self, presented: Option<&str>) -> (BoardSession, bool) {
        let now = self.clock.now();
        let mut sessions = self.lock_sessions();

        let before = sessions.len();
        sessions.retain(|_, slot| now - slot.last_seen <= SESSION_IDLE_LIMIT);
        if sessions.len() < before {
            debug!(discarded = before - sessions.len(), "Discarded idle sessions");
        }

        if let Some(id) = presented
            && let Some(slot) = sessions.get_mut(id)
        {
            slot.last_seen = now;
            return (
                BoardSession {
                    id: id.to_string(),
                    board: slot.board.clone(),
                },
                false,
            );
        }

        let id = loop {
            let id = self.ids.generate();
            if !sessions.contains_key(&id) {
                break id;
            }
        };

        let board = Arc::new(
            LinkService::new(Arc::new(InMemoryLinkRepository::new()), self.origin.clone())
                .with_clock(self.clock.clone()),
        );
        sessions.insert(
            id.clone(),
            SessionSlot {
                board: board.clone(),
                last_seen: now,
            },
        );
        debug!(sessions = sessions.len(), "Opened board session");

        (BoardSession { id, board }, true)
    }

    /// Number of sessions currently held.
    pub fn len(&self) -> usize {
        self.lock_sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sums entries and running countdowns over every session.
    pub async fn stats(&self) -> BoardStats {
        let boards: Vec<Arc<BoardService>> = self
            .lock_sessions()
            .values()
            .map(|slot| slot.board.clone())
            .collect();

        let mut entries = 0;
        for board in &boards {
            entries += board.count().await;
        }

        BoardStats {
            sessions: boards.len(),
            entries,
            active_clocks: boards.iter().map(|board| board.active_clocks()).sum(),
        }
    }

    fn lock_sessions(&self) -> MutexGuard<'_, HashMap<String, SessionSlot>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
