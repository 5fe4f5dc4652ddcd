//! Infrastructure layer.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory repository implementations

pub mod memory;
