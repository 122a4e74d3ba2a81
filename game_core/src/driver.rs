//! Fixed-timestep driver
//!
//! Converts wall-clock time into whole simulation ticks. The caller owns the
//! driver and decides when to feed it, so the simulation rate is independent
//! of how often frames are presented.

use crate::params::Params;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_ticks: Params::MAX_CATCH_UP_TICKS,
        }
    }

    /// One tick per frame at `rate` frames per second
    pub fn from_rate(rate: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(rate.max(1))))
    }

    /// Cap on ticks emitted by a single `advance`
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks.max(1);
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time banked toward the next tick
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Bank `elapsed` and return how many ticks are now due.
    ///
    /// At most `max_ticks` are returned; backlog beyond that is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            log::debug!(
                target: "driver",
                "Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
