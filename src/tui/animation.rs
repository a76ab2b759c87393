//! Transient highlight of the result card.

use std::time::{Duration, Instant};

/// Highlight that switches off a fixed time after it was started.
///
/// Time is passed in by the caller so the timer can be driven in tests.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    duration: Duration,
    started: Option<Instant>,
}

impl Highlight {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }

    /// Start (or restart) the highlight at `now`.
    pub fn trigger_at(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Clear the highlight once its duration has elapsed.
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(started) = self.started {
            if now.saturating_duration_since(started) >= self.duration {
                self.started = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }
}
