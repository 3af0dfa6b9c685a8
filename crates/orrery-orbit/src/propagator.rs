//! Mean-motion propagation: advance the mean anomaly linearly in time.
//!
//! This is the two-body path for bodies that have no full ephemeris behind
//! them (moons, minor bodies, and the built-in planetary table).

use orrery_math::{SimTime, normalize_angle};

use crate::elements::OrbitalElements;

/// Mean anomaly at `t`, normalized to `[0, 2π)`.
///
/// Must not be called for a body with a zero or non-finite period; callers
/// treat those as stationary (see [`OrbitalElements::is_periodic`]).
pub fn mean_anomaly_at(elements: &OrbitalElements, t: SimTime) -> f64 {
    debug_assert!(
        elements.is_periodic(),
        "mean-motion propagation needs a positive period, got {}",
        elements.orbital_period
    );
    advance_mean_anomaly(
        elements.mean_anomaly_epoch,
        elements.orbital_period,
        t.seconds_since(elements.epoch),
    )
}

/// `normalize(M₀ + n·Δt)` with `n = 2π / period`. Both times in seconds.
pub fn advance_mean_anomaly(mean_anomaly_epoch: f64, period_seconds: f64, elapsed_seconds: f64) -> f64 {
    let mean_motion = std::f64::consts::TAU / period_seconds;
    normalize_angle(mean_anomaly_epoch + mean_motion * elapsed_seconds)
}
