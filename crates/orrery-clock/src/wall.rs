//! Wall-clock sources for real-time mode.

use std::time::{SystemTime, UNIX_EPOCH};

use orrery_math::SimTime;

/// Reports the current wall-clock time.
pub trait WallClock {
    fn now(&self) -> SimTime;
}

/// The operating system's clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now(&self) -> SimTime {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs_f64() * 1_000.0,
            Err(before) => -before.duration().as_secs_f64() * 1_000.0,
        };
        SimTime::from_unix_millis(millis)
    }
}

/// A wall clock that only moves when told to. Used by tests and headless replays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManualWallClock {
    now: SimTime,
}

impl ManualWallClock {
    pub fn new(now: SimTime) -> Self {
        Self { now }
    }

    pub fn set(&mut self, now: SimTime) {
        self.now = now;
    }

    pub fn advance_seconds(&mut self, seconds: f64) {
        self.now = self.now.offset_seconds(seconds);
    }
}

impl WallClock for ManualWallClock {
    fn now(&self) -> SimTime {
        self.now
    }
}
