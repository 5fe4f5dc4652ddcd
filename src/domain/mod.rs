//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Wall-clock sources
//! - [`countdown`] - Remaining-time arithmetic and display rule
//! - [`expiry_clock`] - Per-entry countdown task
//!
//! # Countdown Flow
//!
//! 1. A submission creates a [`entities::LinkEntry`] expiring 30 minutes out
//! 2. An [`expiry_clock::ExpiryClockHandle`] is spawned for it
//! 3. Every second the task publishes a fresh [`countdown::CountdownState`]
//! 4. After publishing an expired state the task stops

pub mod clock;
pub mod countdown;
pub mod entities;
pub mod expiry_clock;
pub mod repositories;
