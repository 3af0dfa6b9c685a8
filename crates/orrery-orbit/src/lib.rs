//! Keplerian orbits for the orrery: solver, propagation, light-time, frames, and the body catalog.

pub mod body;
pub mod catalog;
pub mod elements;
pub mod ephemeris;
pub mod frame;
pub mod kepler;
pub mod light_time;
pub mod orbit_path;
pub mod propagator;
pub mod query;
pub mod third_law;


pub use body::{Body, BodyKind, Placement};
pub use catalog::{BodyCatalog, CatalogError};
pub use elements::{ElementsError, OrbitalElements};
pub use ephemeris::{Ephemeris, KeplerianEphemeris};
pub use frame::{Frame, Position, select_frame};
pub use kepler::{KeplerSolution, solve_kepler, solve_kepler_detailed};
pub use light_time::{
    LightTimeOptions, LightTimeSolution, PositionSource, correct_light_time, instantaneous,
};
pub use orbit_path::{DEFAULT_SEGMENTS, OrbitPath, sample_orbit};
pub use propagator::{advance_mean_anomaly, mean_anomaly_at};
pub use query::{PositionOptions, PositionSolver};
pub use third_law::{kepler_period_years, mean_orbital_speed_km_s};
