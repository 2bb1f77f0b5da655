use std::time::Duration;

use web_time::Instant;

/// Holds back the computer's move until a fixed delay has elapsed.
///
/// Non-blocking: the shell polls [`AiPacer::is_due`] from its own loop, which
/// keeps it usable from a browser event loop as well as a native one.
#[derive(Debug, Clone)]
pub struct AiPacer {
    delay: Duration,
    armed_at: Option<Instant>,
}

impl AiPacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    /// Starts the countdown. Re-arming an armed pacer keeps the first start.
    pub fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.remaining(now).is_some_and(|left| left.is_zero())
    }

    /// Time left before the move may be applied, `None` when not armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let armed_at = self.armed_at?;
        let elapsed = now.saturating_duration_since(armed_at);
        Some(self.delay.saturating_sub(elapsed))
    }

    pub fn reset(&mut self) {
        self.armed_at = None;
    }
}
