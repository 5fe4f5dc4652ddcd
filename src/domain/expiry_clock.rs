//! Per-entry countdown task.
//!
//! Every displayed entry owns one [`ExpiryClockHandle`]. The handle spawns a
//! tokio task that recomputes [`remaining`] once per tick and publishes it on a
//! `watch` channel. The task stops on its own once it has published an expired
//! state, and it is aborted when the handle is dropped.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::countdown::{CountdownState, remaining};

/// Cadence at which countdowns are recomputed.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owner of a running countdown task.
///
/// Dropping the handle cancels the task immediately, whichever way the owner
/// goes away.
#[derive(Debug)]
pub struct ExpiryClockHandle {
    state: watch::Receiver<CountdownState>,
    task: JoinHandle<()>,
}

impl ExpiryClockHandle {
    /// Computes the initial state and starts ticking every `tick`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(expires_at: DateTime<Utc>, clock: Arc<dyn Clock>, tick: Duration) -> Self {
        let initial = remaining(clock.now(), expires_at);
        let (tx, rx) = watch::channel(initial);
        let task = tokio::spawn(run_expiry_clock(tx, expires_at, clock, tick));

        Self { state: rx, task }
    }

    /// Latest published state.
    pub fn current(&self) -> CountdownState {
        *self.state.borrow()
    }

    /// A receiver that is notified on every tick.
    ///
    /// `changed()` on it returns an error once the task has stopped.
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state.clone()
    }

    /// Returns true while the task is still counting.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ExpiryClockHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_expiry_clock(
    tx: watch::Sender<CountdownState>,
    expires_at: DateTime<Utc>,
    clock: Arc<dyn Clock>,
    tick: Duration,
) {
    if tx.borrow().is_expired() {
        return;
    }

    let mut interval = tokio::time::interval_at(Instant::now() + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let state = remaining(clock.now(), expires_at);
        if tx.send(state).is_err() {
            debug!(%expires_at, "No countdown receivers left, stopping");
            break;
        }

        if state.is_expired() {
            debug!(%expires_at, "Countdown expired, stopping");
            break;
        }
    }
}
