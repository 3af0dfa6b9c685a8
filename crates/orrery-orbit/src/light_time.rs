//! Light-time correction: where was the target when the light now arriving left it?
//!
//! Solves `τ = |O(t) − P(t − τ)| / c` by fixed-point iteration. The
//! iteration contracts geometrically for solar-system distances, but the
//! round count is still capped; a run that exhausts the budget falls back to
//! the instantaneous position.

use glam::DVec3;
use orrery_math::SimTime;
use orrery_math::units::light_time_seconds;
use tracing::debug;

/// Anything that can report a position at a given time, in AU.
pub trait PositionSource {
    /// Position at `t`, or `None` when unavailable.
    fn position_at(&self, t: SimTime) -> Option<DVec3>;
}

impl<F> PositionSource for F
where
    F: Fn(SimTime) -> Option<DVec3>,
{
    fn position_at(&self, t: SimTime) -> Option<DVec3> {
        self(t)
    }
}

/// Iteration budget for the light-time solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightTimeOptions {
    /// Maximum fixed-point rounds after the initial estimate.
    pub max_iterations: u32,
    /// Stop once `|τₙ₊₁ − τₙ|` drops below this many seconds.
    pub tolerance_seconds: f64,
}

impl Default for LightTimeOptions {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            tolerance_seconds: 1e-3,
        }
    }
}

/// Result of a light-time solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightTimeSolution {
    /// Retarded position on success, instantaneous position on fallback.
    pub position: DVec3,
    /// Light travel time applied, in seconds (zero on fallback).
    pub light_time_seconds: f64,
    /// Fixed-point rounds taken.
    pub iterations: u32,
    /// Whether the tolerance was reached within budget.
    pub converged: bool,
}

/// The uncorrected position at `t_obs`; the disabled-correction shortcut.
pub fn instantaneous(target: &impl PositionSource, t_obs: SimTime) -> Option<LightTimeSolution> {
    Some(LightTimeSolution {
        position: target.position_at(t_obs)?,
        light_time_seconds: 0.0,
        iterations: 0,
        converged: true,
    })
}

/// Solve for the retarded position of `target` as seen from `observer` at `t_obs`.
///
/// The observer is sampled once, at `t_obs`. Returns `None` only when either
/// source has no position.
pub fn correct_light_time(
    observer: &impl PositionSource,
    target: &impl PositionSource,
    t_obs: SimTime,
    options: LightTimeOptions,
) -> Option<LightTimeSolution> {
    let observer_now = observer.position_at(t_obs)?;
    let target_now = target.position_at(t_obs)?;

    let mut tau = light_time_seconds((observer_now - target_now).length());
    for iteration in 1..=options.max_iterations {
        let retarded = target.position_at(t_obs.offset_seconds(-tau))?;
        let next = light_time_seconds((observer_now - retarded).length());
        let delta = (next - tau).abs();
        tau = next;
        if delta < options.tolerance_seconds {
            return Some(LightTimeSolution {
                position: target.position_at(t_obs.offset_seconds(-tau))?,
                light_time_seconds: tau,
                iterations: iteration,
                converged: true,
            });
        }
    }

    debug!(
        "Light-time iteration did not converge in {} rounds (last τ = {:.3}s), using instantaneous position",
        options.max_iterations, tau
    );
    Some(LightTimeSolution {
        position: target_now,
        light_time_seconds: 0.0,
        iterations: options.max_iterations,
        converged: false,
    })
}
