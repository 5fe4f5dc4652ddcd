//! HTML template rendering handlers.

mod board;
mod events;

pub use board::{BoardRow, board_handler, link_href, submit_form_handler};
pub use events::{CountdownTick, countdown_stream, events_handler};
