//! # linkdrop
//!
//! Paste a URL, get a short link that counts down to a fixed 30-minute expiry.
//!
//! Everything lives in process memory: there is no database, no real
//! redirection, and every link disappears when the process stops. Each
//! browser session has its own board. Short links are fabricated from the
//! configured public origin and a 4-character base62 code that is unique among
//! the links currently on that board.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity, countdown arithmetic, per-entry clock tasks
//! - **Application Layer** ([`application`]) - The link service that owns all board state
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **Sessions** ([`session`]) - One link service per browser session
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered board page and live countdown feed
//!
//! ## Quick Start
//!
//! ```bash
//! export PUBLIC_ORIGIN="http://localhost:3000"
//! cargo run
//!
//! # or the terminal board
//! cargo run --bin console
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the console
/// binary and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSnapshot};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::countdown::{CountdownDisplay, CountdownState, remaining};
    pub use crate::domain::entities::{LINK_TTL, LinkEntry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryLinkRepository;
    pub use crate::session::{BoardSession, BoardStats, SessionRegistry};
    pub use crate::state::{AppState, BoardService};
}
