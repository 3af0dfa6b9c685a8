//! The simulation clock: one time cursor shared by every position query in a frame.

use orrery_math::SimTime;
use orrery_math::units::SECONDS_PER_DAY;
use tracing::warn;

use crate::wall::{SystemWallClock, WallClock};

/// Simulated days per real second at rate 1.
pub const DAYS_PER_SECOND: f64 = 1.0;

/// How the cursor advances while running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockMode {
    /// The cursor follows the wall clock directly.
    RealTime,
    /// The cursor advances by `rate × days_per_second` simulated days per real second.
    Accelerated,
}

/// Simulation time cursor.
///
/// Pause state and mode are orthogonal. In real-time mode the cursor is
/// replaced by the wall clock on every tick, so pausing and resuming never
/// accumulates drift.
#[derive(Clone, Debug)]
pub struct SimulationClock<W = SystemWallClock> {
    wall: W,
    cursor: SimTime,
    mode: ClockMode,
    paused: bool,
    rate: f64,
    days_per_second: f64,
}

impl SimulationClock<SystemWallClock> {
    /// A running real-time clock on the system clock.
    pub fn new() -> Self {
        Self::with_wall_clock(SystemWallClock)
    }
}

impl Default for SimulationClock<SystemWallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WallClock> SimulationClock<W> {
    /// A running real-time clock starting at the wall clock's current time.
    pub fn with_wall_clock(wall: W) -> Self {
        let cursor = wall.now();
        Self {
            wall,
            cursor,
            mode: ClockMode::RealTime,
            paused: false,
            rate: 1.0,
            days_per_second: DAYS_PER_SECOND,
        }
    }

    /// Override the base days-per-second constant. Ignored unless positive and finite.
    pub fn with_days_per_second(mut self, days_per_second: f64) -> Self {
        if days_per_second.is_finite() && days_per_second > 0.0 {
            self.days_per_second = days_per_second;
        } else {
            warn!("Ignoring invalid days_per_second {days_per_second}, keeping {}", self.days_per_second);
        }
        self
    }

    /// Advance by one frame of `wall_delta_seconds` real time. Returns the new cursor.
    pub fn tick(&mut self, wall_delta_seconds: f64) -> SimTime {
        if self.paused {
            return self.cursor;
        }
        match self.mode {
            ClockMode::RealTime => self.cursor = self.wall.now(),
            ClockMode::Accelerated => {
                debug_assert!(wall_delta_seconds >= 0.0, "negative frame delta {wall_delta_seconds}");
                let simulated = wall_delta_seconds * self.rate * self.days_per_second * SECONDS_PER_DAY;
                self.cursor = self.cursor.offset_seconds(simulated);
            }
        }
        self.cursor
    }

    /// The cursor. Sample once per frame and reuse the value.
    pub fn current_time(&self) -> SimTime {
        self.cursor
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause state, returning whether the clock is now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Switch mode. Accelerated mode continues from the current cursor; real-time
    /// mode snaps to the wall clock on the next tick.
    pub fn set_mode(&mut self, mode: ClockMode) {
        self.mode = mode;
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Set the acceleration multiplier. Negative values clamp to zero (frozen,
    /// not paused); non-finite values are rejected.
    pub fn set_rate(&mut self, rate: f64) {
        if !rate.is_finite() {
            warn!("Ignoring non-finite clock rate {rate}, keeping {}", self.rate);
            return;
        }
        if rate < 0.0 {
            warn!("Clock rate {rate} clamped to 0");
        }
        self.rate = rate.max(0.0);
    }

    pub fn days_per_second(&self) -> f64 {
        self.days_per_second
    }

    /// Jump the cursor. Has no lasting effect in real-time mode while running.
    pub fn set_time(&mut self, t: SimTime) {
        if t.is_finite() {
            self.cursor = t;
        } else {
            warn!("Ignoring non-finite simulation time {t}");
        }
    }

    pub fn wall_clock(&self) -> &W {
        &self.wall
    }

    pub fn wall_clock_mut(&mut self) -> &mut W {
        &mut self.wall
    }
}
