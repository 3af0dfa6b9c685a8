//! Piecewise linear/logarithmic mapping between physical distance and scene units.
//!
//! Inside [`ScaleConfig::linear_limit_au`] distances scale linearly so the
//! planets keep their true proportions; beyond it each decade of distance
//! costs a fixed number of scene units, which lets one camera span the inner
//! solar system and the observable universe.

use glam::DVec3;
use orrery_math::units::{au_to_light_years, light_years_to_au};

/// Scene units per AU inside the linear zone.
pub const SCENE_UNITS_PER_AU: f64 = 25.0;
/// Distance at which the mapping switches from linear to logarithmic, in AU.
pub const LINEAR_LIMIT_AU: f64 = 50.0;
/// Scene units per decade of distance beyond the linear zone.
pub const LOG_GAIN: f64 = 1_200.0;
/// Closest the camera may sit to the origin, in scene units.
pub const MIN_CAMERA_DISTANCE: f64 = 40.0;
/// Farthest the camera may sit from the origin, in scene units.
pub const MAX_CAMERA_DISTANCE: f64 = 60_000.0;

/// Parameters of the distance-scale mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    pub linear_limit_au: f64,
    pub scene_units_per_au: f64,
    pub log_gain: f64,
    pub min_camera_distance: f64,
    pub max_camera_distance: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            linear_limit_au: LINEAR_LIMIT_AU,
            scene_units_per_au: SCENE_UNITS_PER_AU,
            log_gain: LOG_GAIN,
            min_camera_distance: MIN_CAMERA_DISTANCE,
            max_camera_distance: MAX_CAMERA_DISTANCE,
        }
    }
}

impl ScaleConfig {
    /// Scene distance at the linear/log boundary.
    pub fn linear_limit_scene(&self) -> f64 {
        self.linear_limit_au * self.scene_units_per_au
    }

    /// Map a non-negative physical distance in AU to scene units.
    pub fn scene_distance(&self, distance_au: f64) -> f64 {
        debug_assert!(distance_au >= 0.0, "negative distance {distance_au}; use scene_distance_signed");
        if distance_au <= self.linear_limit_au {
            distance_au * self.scene_units_per_au
        } else {
            self.linear_limit_scene()
                + (distance_au.log10() - self.linear_limit_au.log10()) * self.log_gain
        }
    }

    /// Map a signed distance, preserving its sign.
    pub fn scene_distance_signed(&self, distance_au: f64) -> f64 {
        distance_au.signum() * self.scene_distance(distance_au.abs())
    }

    /// Map a distance in light-years to scene units.
    pub fn scene_distance_ly(&self, distance_ly: f64) -> f64 {
        self.scene_distance(light_years_to_au(distance_ly))
    }

    /// Map a heliocentric position to scene space: same direction, mapped length.
    pub fn scene_position(&self, position_au: DVec3) -> DVec3 {
        let distance = position_au.length();
        if distance == 0.0 {
            return DVec3::ZERO;
        }
        position_au / distance * self.scene_distance(distance)
    }

    /// Inverse of [`scene_distance`](Self::scene_distance). The scene distance is
    /// first clamped to the camera range.
    pub fn physical_distance(&self, scene_distance: f64) -> f64 {
        let s = scene_distance.clamp(self.min_camera_distance, self.max_camera_distance);
        if s <= self.linear_limit_scene() {
            s / self.scene_units_per_au
        } else {
            10f64.powf((s - self.linear_limit_scene()) / self.log_gain + self.linear_limit_au.log10())
        }
    }

    /// Inverse mapping in light-years.
    pub fn physical_distance_ly(&self, scene_distance: f64) -> f64 {
        au_to_light_years(self.physical_distance(scene_distance))
    }

    /// Physical distances (AU) reachable from the camera range.
    pub fn valid_physical_range(&self) -> (f64, f64) {
        (
            self.physical_distance(self.min_camera_distance),
            self.physical_distance(self.max_camera_distance),
        )
    }
}

/// [`ScaleConfig::scene_distance`] with the default parameters.
pub fn scene_distance(distance_au: f64) -> f64 {
    ScaleConfig::default().scene_distance(distance_au)
}

/// [`ScaleConfig::physical_distance`] with the default parameters.
pub fn physical_distance(scene_distance: f64) -> f64 {
    ScaleConfig::default().physical_distance(scene_distance)
}
