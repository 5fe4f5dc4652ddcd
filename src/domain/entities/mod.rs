//! Core domain entities.
//!
//! Entities are plain data structures without business logic. There is a
//! single entity, [`LinkEntry`], created on submission and never modified.

pub mod link;

pub use link::{LINK_TTL, LinkEntry};
