//! Server-rendered board for browsers.
//!
//! Uses Askama templates. The page shows a single text field, a submit button
//! and the entry list with each entry's countdown as of page render.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`routes`] - Board route configuration

pub mod handlers;
pub mod routes;
