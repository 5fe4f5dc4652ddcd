//! Remaining-time arithmetic and its display rule.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Time left until an expiry, recomputed on every tick.
///
/// `minutes` and `seconds` are the raw modular components of `total_ms`.
/// They are not clamped, so once `total_ms` goes negative they go negative too;
/// [`CountdownDisplay`] is what decides how that is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownState {
    pub total_ms: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownState {
    pub fn is_expired(&self) -> bool {
        self.total_ms <= 0
    }

    pub fn display(&self) -> CountdownDisplay {
        CountdownDisplay::from(*self)
    }
}

/// Computes the time remaining between `now` and `expires_at`.
///
/// `minutes = floor((total_ms / 60_000) mod 60)` and
/// `seconds = floor((total_ms / 1000) mod 60)`, where `mod` keeps the sign of the
/// dividend.
pub fn remaining(now: DateTime<Utc>, expires_at: DateTime<Utc>) -> CountdownState {
    let total_ms = (expires_at - now).num_milliseconds();
    let total_secs = total_ms as f64 / 1000.0;

    CountdownState {
        total_ms,
        minutes: ((total_secs / 60.0) % 60.0).floor() as i64,
        seconds: (total_secs % 60.0).floor() as i64,
    }
}

/// What a viewer sees for a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownDisplay {
    Counting { minutes: i64, seconds: i64 },
    Expired,
}

impl From<CountdownState> for CountdownDisplay {
    fn from(state: CountdownState) -> Self {
        if state.is_expired() {
            Self::Expired
        } else {
            Self::Counting {
                minutes: state.minutes,
                seconds: state.seconds,
            }
        }
    }
}

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counting { minutes, seconds } => write!(f, "{minutes:02}:{seconds:02}"),
            Self::Expired => f.write_str("Expired"),
        }
    }
}
