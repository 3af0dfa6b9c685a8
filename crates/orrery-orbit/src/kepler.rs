//! Newton-Raphson solver for Kepler's equation `E - e·sin(E) = M`.

use std::f64::consts::PI;

/// Iteration cap for the Newton-Raphson loop.
pub const MAX_ITERATIONS: u32 = 20;

/// Early-exit threshold on the Newton step `|ΔE|`, in radians.
pub const TOLERANCE: f64 = 1e-8;

/// Eccentricity at and above which the initial guess switches from `M` to `π`.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Outcome of a solver run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians (best available estimate).
    pub eccentric_anomaly: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Whether the last step fell below [`TOLERANCE`].
    pub converged: bool,
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// `mean_anomaly` may be any real value; it is not normalized here. Valid for
/// `0 <= e < 1`. After [`MAX_ITERATIONS`] the last iterate is returned as-is.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_kepler_detailed(mean_anomaly, eccentricity).eccentric_anomaly
}

/// Like [`solve_kepler`] but also reports iteration count and convergence.
pub fn solve_kepler_detailed(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    debug_assert!(
        (0.0..1.0).contains(&eccentricity),
        "eccentricity {eccentricity} outside [0, 1)"
    );

    let e = eccentricity;
    let mut e_anom = if e < HIGH_ECCENTRICITY { mean_anomaly } else { PI };

    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let f = e_anom - e * e_anom.sin() - mean_anomaly;
        let derivative = 1.0 - e * e_anom.cos();
        let step = f / derivative;
        e_anom -= step;
        if step.abs() < TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: e_anom,
                iterations,
                converged: true,
            };
        }
    }

    KeplerSolution {
        eccentric_anomaly: e_anom,
        iterations,
        converged: false,
    }
}
