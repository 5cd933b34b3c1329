//! Time sources
//!
//! The simulation runs on wall-clock seconds, not on a fixed tick: every
//! timer (chain, wave, coin orbits) is derived from the time read at the
//! start of a step. Time must never go backward within a run.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Something that reports the current time in fractional seconds
pub trait TimeSource {
    fn now_seconds(&self) -> f64;
}

/// Real time: UNIX epoch seconds at construction, advanced by a monotonic
/// `Instant` so system clock adjustments can't move it backward.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: Instant,
    epoch_at_origin: f64,
}

impl WallClock {
    pub fn new() -> Self {
        let epoch_at_origin = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self {
            origin: Instant::now(),
            epoch_at_origin,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn now_seconds(&self) -> f64 {
        self.epoch_at_origin + self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven time for tests and replays.
///
/// Clones share the same underlying time, so a clone handed to a `Scene`
/// can be driven from outside.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl TimeSource for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now.get()
    }
}
