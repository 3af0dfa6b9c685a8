//! Physical units, angle helpers, and the simulation timestamp shared by every Orrery crate.

mod angle;
mod time;
pub mod units;

pub use angle::normalize_angle;
pub use time::SimTime;
