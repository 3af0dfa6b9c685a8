//! Simulation clock with real-time, accelerated, and paused states.

mod clock;
mod wall;

pub use clock::{ClockMode, DAYS_PER_SECOND, SimulationClock};
pub use wall::{ManualWallClock, SystemWallClock, WallClock};
