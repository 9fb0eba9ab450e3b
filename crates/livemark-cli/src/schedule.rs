//! Trailing-edge render scheduling.
//!
//! Rapid edits are coalesced into one preview render that fires once the
//! input has been quiet for the configured delay. There is a single pending
//! slot: a new request replaces the pending one instead of queuing behind it.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct RenderScheduler {
    delay: Duration,
    pending: Option<Instant>,
}

impl RenderScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending render with one due `delay` after `now`.
    pub fn request(&mut self, now: Instant) {
        self.pending = Some(now + self.delay);
    }

    /// Returns true exactly once when the pending render is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(due) if now >= due => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// How long the event loop may block before the pending render is due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|due| due.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
