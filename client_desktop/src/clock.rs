//! Frame pacing
//!
//! Decides when the next frame is due and how much wall-clock time the
//! simulation should be fed for it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last: Instant,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32, now: Instant) -> Self {
        let interval = Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)));
        Self {
            interval,
            last: now,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame should start
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Mark a frame as started at `now`, returning the time since the
    /// previous one.
    ///
    /// The deadline advances by one interval; if the loop has fallen behind
    /// it is rebased on `now` instead of bursting to catch up.
    pub fn begin_frame(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        elapsed
    }

    pub fn reset(&mut self, now: Instant) {
        self.last = now;
        self.next = now + self.interval;
    }
}
