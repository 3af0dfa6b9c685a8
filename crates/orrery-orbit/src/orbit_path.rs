//! Closed-orbit polylines for display.

use std::f64::consts::TAU;

use glam::DVec3;
use orrery_math::SimTime;

use crate::elements::OrbitalElements;
use crate::propagator::mean_anomaly_at;

/// Segments per orbit when the caller has no preference.
pub const DEFAULT_SEGMENTS: usize = 120;

/// Sample one full revolution starting at mean anomaly `start`.
///
/// Returns `segments + 1` points; the last coincides with the first so the
/// polyline closes. Positions are relative to the orbit's focus, in AU.
pub fn sample_orbit(elements: &OrbitalElements, start: f64, segments: usize) -> Vec<DVec3> {
    let segments = segments.max(3);
    let step = TAU / segments as f64;
    (0..=segments)
        .map(|i| elements.position_at_mean_anomaly(start + step * i as f64))
        .collect()
}

/// A sampled orbit that only changes on an explicit [`OrbitPath::refresh`].
#[derive(Debug, Clone)]
pub struct OrbitPath {
    elements: OrbitalElements,
    segments: usize,
    epoch: SimTime,
    points: Vec<DVec3>,
}

impl OrbitPath {
    /// Sample `elements` at `epoch`.
    pub fn sample(elements: OrbitalElements, segments: usize, epoch: SimTime) -> Self {
        let mut path = Self {
            elements,
            segments,
            epoch,
            points: Vec::new(),
        };
        path.resample();
        path
    }

    /// Re-sample at a new epoch. Returns `false` when the epoch did not change.
    pub fn refresh(&mut self, epoch: SimTime) -> bool {
        if epoch == self.epoch {
            return false;
        }
        self.epoch = epoch;
        self.resample();
        true
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn epoch(&self) -> SimTime {
        self.epoch
    }

    fn resample(&mut self) {
        let start = if self.elements.is_periodic() {
            mean_anomaly_at(&self.elements, self.epoch)
        } else {
            self.elements.mean_anomaly_epoch
        };
        self.points = sample_orbit(&self.elements, start, self.segments);
    }
}
