//! Live countdown feed for the board page.

use axum::{
    Extension,
    response::{
        IntoResponse,
        sse::{Event, KeepAlive, Sse},
    },
};
use serde::Serialize;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt, StreamMap};

use crate::domain::countdown::CountdownState;
use crate::session::BoardSession;

/// Payload of one `countdown` event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountdownTick {
    pub short_code: String,
    pub countdown: String,
    pub remaining_ms: i64,
    pub expired: bool,
}

impl CountdownTick {
    fn new(short_code: String, state: &CountdownState) -> Self {
        Self {
            short_code,
            countdown: state.display().to_string(),
            remaining_ms: state.total_ms,
            expired: state.is_expired(),
        }
    }
}

/// Merges per-entry countdown receivers into one stream of ticks.
///
/// Each entry first yields its latest state, then one tick per published
/// update. The stream ends once every entry's clock has stopped.
pub fn countdown_stream(
    feeds: Vec<(String, watch::Receiver<CountdownState>)>,
) -> impl Stream<Item = CountdownTick> {
    let mut streams = StreamMap::new();
    for (code, rx) in feeds {
        streams.insert(code, WatchStream::new(rx));
    }

    streams.map(|(code, state)| CountdownTick::new(code, &state))
}

/// Streams the caller's countdowns as server-sent events.
///
/// # Endpoint
///
/// `GET /events`
///
/// # Events
///
/// ```text
/// event: countdown
/// data: {"short_code":"aZ3k","countdown":"29:59","remaining_ms":1799000,"expired":false}
///
/// event: done
/// data: done
/// ```
///
/// `done` is sent once every entry on the board has expired, after which the
/// stream closes. Entries submitted after connecting are picked up when the
/// page reloads.
pub async fn events_handler(Extension(session): Extension<BoardSession>) -> impl IntoResponse {
    let events = countdown_stream(session.board.countdown_feeds())
        .map(|tick| Event::default().event("countdown").json_data(tick))
        .chain(tokio_stream::once(Ok(Event::default().event("done").data("done"))));

    Sse::new(events).keep_alive(KeepAlive::default())
}
