// Elapsed-time stopwatch built on a monotonic clock.
// A Timer is always running: it starts on construction and `restart` only
// moves the baseline forward. There is no pause or stop state.

#[cfg(test)]
mod tests;

use crate::clock::{Clock, MonotonicClock};
use crate::format::FriendlyDuration;
use crate::util;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::trace;

/// A running stopwatch that reports elapsed time as a friendly string.
///
/// Reads (`elapsed`, `elapsed_friendly`) take `&self` and may be shared freely;
/// `restart` takes `&mut self`, so resetting while others read needs the caller's
/// own synchronization (e.g. a `Mutex<Timer>`).
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = MonotonicClock> {
    clock: C,
    started_at: Instant,
}

impl Timer {
    /// Creates a timer on the system monotonic clock, started now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Creates a timer reading from `clock`, started at the clock's current instant.
    pub fn with_clock(clock: C) -> Self {
        let started_at = clock.now();
        Timer { clock, started_at }
    }

    /// Resets the baseline to now, discarding the time elapsed so far.
    pub fn restart(&mut self) {
        let now = self.clock.now();
        trace!(
            discarded = %util::format_debug(now.saturating_duration_since(self.started_at)),
            "Timer restarted"
        );
        self.started_at = now;
    }

    /// Raw time elapsed since construction or the last restart.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }

    /// Elapsed time rendered with [`format_duration`](crate::format::format_duration).
    #[must_use]
    pub fn elapsed_friendly(&self) -> String {
        FriendlyDuration(self.elapsed()).to_string()
    }

    /// The instant the current measurement started at.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

impl<C: Clock> fmt::Display for Timer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FriendlyDuration(self.elapsed()).fmt(f)
    }
}
