//! In-memory repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Ordered link list guarded by a tokio `RwLock`

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
