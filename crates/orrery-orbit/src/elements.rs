//! Classical orbital elements and the perifocal → ecliptic transform.

use glam::{DMat3, DVec3};
use orrery_math::{SimTime, normalize_angle};

use crate::kepler::solve_kepler;
use crate::propagator::mean_anomaly_at;

/// Orbital elements for two-body Keplerian motion.
///
/// Lengths are in astronomical units, angles in radians, and the period in
/// seconds. Elements are immutable once loaded; the mean anomaly is fixed at
/// [`epoch`](Self::epoch) and advanced by the mean-motion propagator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in AU.
    pub semi_major_axis: f64,
    /// Eccentricity [0, 1). 0 = circular orbit.
    pub eccentricity: f64,
    /// Inclination in radians relative to the reference plane.
    pub inclination: f64,
    /// Longitude of ascending node in radians.
    pub longitude_ascending: f64,
    /// Argument of periapsis in radians.
    pub argument_periapsis: f64,
    /// Mean anomaly at epoch in radians.
    pub mean_anomaly_epoch: f64,
    /// Reference epoch for `mean_anomaly_epoch`.
    pub epoch: SimTime,
    /// Orbital period in seconds. Zero marks a body that does not orbit.
    pub orbital_period: f64,
}

/// A malformed element set. Always a data-table bug, never a runtime condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementsError {
    /// Eccentricity outside the elliptical range.
    #[error("eccentricity {0} outside [0, 1)")]
    Eccentricity(f64),

    /// Semi-major axis negative or not finite.
    #[error("semi-major axis {0} AU must be finite and non-negative")]
    SemiMajorAxis(f64),

    /// Period negative or not finite.
    #[error("orbital period {0} s must be finite and non-negative")]
    Period(f64),

    /// An angle is NaN or infinite.
    #[error("angle `{0}` is not finite")]
    Angle(&'static str),
}

impl OrbitalElements {
    /// Build elements from the mean-longitude form used by planetary tables.
    ///
    /// `longitude_perihelion` is ϖ = Ω + ω and `mean_longitude` is L = ϖ + M,
    /// all in radians.
    #[allow(clippy::too_many_arguments)]
    pub fn from_mean_longitude(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_ascending: f64,
        longitude_perihelion: f64,
        mean_longitude: f64,
        epoch: SimTime,
        orbital_period: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_ascending,
            argument_periapsis: normalize_angle(longitude_perihelion - longitude_ascending),
            mean_anomaly_epoch: normalize_angle(mean_longitude - longitude_perihelion),
            epoch,
            orbital_period,
        }
    }

    /// Check the invariants every consumer relies on.
    pub fn validate(&self) -> Result<(), ElementsError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::Eccentricity(self.eccentricity));
        }
        if !self.semi_major_axis.is_finite() || self.semi_major_axis < 0.0 {
            return Err(ElementsError::SemiMajorAxis(self.semi_major_axis));
        }
        if !self.orbital_period.is_finite() || self.orbital_period < 0.0 {
            return Err(ElementsError::Period(self.orbital_period));
        }
        let angles = [
            ("inclination", self.inclination),
            ("longitude_ascending", self.longitude_ascending),
            ("argument_periapsis", self.argument_periapsis),
            ("mean_anomaly_epoch", self.mean_anomaly_epoch),
        ];
        for (name, value) in angles {
            if !value.is_finite() {
                return Err(ElementsError::Angle(name));
            }
        }
        Ok(())
    }

    /// Whether the body actually moves. A zero period means stationary.
    pub fn is_periodic(&self) -> bool {
        self.orbital_period.is_finite() && self.orbital_period > 0.0
    }

    /// Mean motion in radians per second.
    pub fn mean_motion(&self) -> f64 {
        std::f64::consts::TAU / self.orbital_period
    }

    /// Closest approach to the focus, in AU.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, in AU.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Position in the perifocal frame (x toward periapsis, z along the
    /// orbit normal) for the given mean anomaly.
    pub fn perifocal_position(&self, mean_anomaly: f64) -> DVec3 {
        let e = self.eccentricity;
        let e_anom = solve_kepler(mean_anomaly, e);
        let x = self.semi_major_axis * (e_anom.cos() - e);
        let y = self.semi_major_axis * (1.0 - e * e).sqrt() * e_anom.sin();
        DVec3::new(x, y, 0.0)
    }

    /// 3-1-3 rotation `R_z(Ω) · R_x(i) · R_z(ω)` from perifocal to reference axes.
    pub fn perifocal_to_reference(&self) -> DMat3 {
        DMat3::from_rotation_z(self.longitude_ascending)
            * DMat3::from_rotation_x(self.inclination)
            * DMat3::from_rotation_z(self.argument_periapsis)
    }

    /// Position in the reference (ecliptic) frame for an already-advanced
    /// mean anomaly, relative to the focus.
    pub fn position_at_mean_anomaly(&self, mean_anomaly: f64) -> DVec3 {
        self.perifocal_to_reference() * self.perifocal_position(mean_anomaly)
    }

    /// Position relative to the focus at simulation time `t`.
    ///
    /// Bodies with a zero period sit at the focus.
    pub fn position_at(&self, t: SimTime) -> DVec3 {
        if !self.is_periodic() {
            return DVec3::ZERO;
        }
        self.position_at_mean_anomaly(mean_anomaly_at(self, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn circular(a: f64) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis: a,
            eccentricity: 0.0,
            inclination: 0.0,
            longitude_ascending: 0.0,
            argument_periapsis: 0.0,
            mean_anomaly_epoch: 0.0,
            epoch: SimTime::J2000,
            orbital_period: 1000.0,
        }
    }

    #[test]
    fn test_circular_perifocal_matches_cos_sin() {
        for a in [0.1, 1.0, 30.07] {
            let orbit = circular(a);
            for i in 0..16 {
                let m = i as f64 / 16.0 * TAU;
                let p = orbit.perifocal_position(m);
                let expected = DVec3::new(a * m.cos(), a * m.sin(), 0.0);
                assert!((p - expected).length() < 1e-12, "a={a}, M={m}: {p:?}");
            }
        }
    }

    #[test]
    fn test_circular_in_plane_is_uniform_motion() {
        let orbit = circular(2.0);
        for i in 0..20 {
            let t = SimTime::J2000.offset_seconds(i as f64 / 20.0 * orbit.orbital_period);
            let pos = orbit.position_at(t);
            assert!((pos.length() - 2.0).abs() < 1e-12);
            assert!(pos.z.abs() < 1e-15);
            let angle = normalize_angle(pos.y.atan2(pos.x));
            let expected = i as f64 / 20.0 * TAU;
            assert!((angle - expected).abs() < 1e-9, "step {i}: {angle} vs {expected}");
        }
    }

    #[test]
    fn test_eccentric_radius_range() {
        let mut orbit = circular(1.0);
        orbit.eccentricity = 0.2056;
        let peri = orbit.position_at_mean_anomaly(0.0).length();
        let apo = orbit.position_at_mean_anomaly(PI).length();
        assert!((peri - orbit.periapsis_distance()).abs() < 1e-12);
        assert!((apo - orbit.apoapsis_distance()).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let orbit = OrbitalElements {
            inclination: 0.4,
            longitude_ascending: 1.1,
            argument_periapsis: 2.3,
            ..circular(1.0)
        };
        let r = orbit.perifocal_to_reference();
        let should_be_identity = r * r.transpose();
        assert!(should_be_identity.abs_diff_eq(DMat3::IDENTITY, 1e-12));
        assert!((r.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inclined_orbit_reaches_expected_height() {
        // Ω = 0, ω = 0: periapsis on the node line, maximum height a·sin(i)
        // a quarter orbit later.
        let orbit = OrbitalElements {
            inclination: 0.3,
            ..circular(1.0)
        };
        let top = orbit.position_at_mean_anomaly(FRAC_PI_2);
        assert!((top.z - 0.3_f64.sin()).abs() < 1e-12);
        let node = orbit.position_at_mean_anomaly(0.0);
        assert!(node.z.abs() < 1e-12);
    }

    #[test]
    fn test_ascending_node_rotates_node_line() {
        let orbit = OrbitalElements {
            inclination: 0.3,
            longitude_ascending: FRAC_PI_2,
            ..circular(1.0)
        };
        let node = orbit.position_at_mean_anomaly(0.0);
        assert!((node - DVec3::Y).length() < 1e-12, "{node:?}");
    }

    #[test]
    fn test_from_mean_longitude() {
        let el = OrbitalElements::from_mean_longitude(
            1.0,
            0.0167,
            0.0,
            0.2,
            1.8,
            1.75,
            SimTime::J2000,
            3.15e7,
        );
        assert!((el.argument_periapsis - 1.6).abs() < 1e-12);
        assert!((el.mean_anomaly_epoch - (TAU - 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let ok = circular(1.0);
        assert!(ok.validate().is_ok());

        let bad = OrbitalElements { eccentricity: 1.0, ..ok };
        assert_eq!(bad.validate(), Err(ElementsError::Eccentricity(1.0)));

        let bad = OrbitalElements { eccentricity: -0.1, ..ok };
        assert!(matches!(bad.validate(), Err(ElementsError::Eccentricity(_))));

        let bad = OrbitalElements { orbital_period: f64::NAN, ..ok };
        assert!(matches!(bad.validate(), Err(ElementsError::Period(_))));

        let bad = OrbitalElements { inclination: f64::INFINITY, ..ok };
        assert_eq!(bad.validate(), Err(ElementsError::Angle("inclination")));
    }

    #[test]
    fn test_zero_period_is_stationary() {
        let orbit = OrbitalElements { orbital_period: 0.0, ..circular(5.0) };
        assert!(!orbit.is_periodic());
        assert_eq!(orbit.position_at(SimTime::J2000.offset_seconds(1e6)), DVec3::ZERO);
    }
}
