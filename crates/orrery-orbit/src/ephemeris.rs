//! Ephemeris abstraction and the built-in Keplerian implementation.
//!
//! A full perturbed ephemeris (VSOP87-class) plugs in behind the same
//! [`Ephemeris`] trait; the rest of the pipeline never needs to know which
//! one answered.

use glam::DVec3;
use orrery_math::SimTime;
use orrery_math::units::SOLAR_MASS_KG;

use crate::body::{Body, BodyKind, Placement};
use crate::catalog::{BodyCatalog, MAX_PARENT_DEPTH};

/// Source of heliocentric body positions, in AU, ecliptic J2000 axes.
pub trait Ephemeris {
    /// Heliocentric position of `body` at `t`, or `None` when the body is unknown.
    fn heliocentric(&self, body: &str, t: SimTime) -> Option<DVec3>;

    /// Position of the Sun relative to the solar-system barycenter at `t`.
    fn sun_barycentric(&self, t: SimTime) -> DVec3;

    /// Barycentric position of `body` at `t`.
    fn barycentric(&self, body: &str, t: SimTime) -> Option<DVec3> {
        Some(self.heliocentric(body, t)? + self.sun_barycentric(t))
    }
}

/// Two-body ephemeris driven by the mean-motion propagator.
///
/// Moons are placed relative to their parent; the barycenter is the
/// mass-weighted mean of every massive orbiting body and the Sun.
#[derive(Debug, Clone)]
pub struct KeplerianEphemeris {
    catalog: BodyCatalog,
    sun_mass_kg: f64,
}

impl KeplerianEphemeris {
    /// Wrap a validated catalog.
    pub fn new(catalog: BodyCatalog) -> Self {
        let sun_mass_kg = catalog
            .of_kind(BodyKind::Star)
            .map(|b| b.mass_kg)
            .find(|&m| m > 0.0)
            .unwrap_or(SOLAR_MASS_KG);
        Self {
            catalog,
            sun_mass_kg,
        }
    }

    /// The catalog this ephemeris answers for.
    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Position of `body` relative to its parent (or the origin) at `t`.
    pub fn local_position(body: &Body, t: SimTime) -> DVec3 {
        match &body.placement {
            Placement::Stationary => DVec3::ZERO,
            Placement::Orbit(elements) => elements.position_at(t),
            Placement::Fixed {
                direction,
                distance_au,
            } => *direction * *distance_au,
        }
    }

    fn heliocentric_of(&self, body: &Body, t: SimTime) -> Option<DVec3> {
        let mut position = Self::local_position(body, t);
        let mut current = body;
        // Up to MAX_PARENT_DEPTH hops, the same bound catalog validation accepts.
        for _ in 0..=MAX_PARENT_DEPTH {
            let Some(parent) = current.parent.as_deref() else {
                return Some(position);
            };
            current = self.catalog.get(parent)?;
            position += Self::local_position(current, t);
        }
        None
    }

    /// Barycenter of the solar system relative to the Sun.
    pub fn barycenter_heliocentric(&self, t: SimTime) -> DVec3 {
        let mut weighted = DVec3::ZERO;
        let mut total_mass = self.sun_mass_kg;
        for body in self.catalog.iter().filter(|b| b.contributes_to_barycenter()) {
            if let Some(position) = self.heliocentric_of(body, t) {
                weighted += position * body.mass_kg;
                total_mass += body.mass_kg;
            }
        }
        weighted / total_mass
    }
}

impl Ephemeris for KeplerianEphemeris {
    fn heliocentric(&self, body: &str, t: SimTime) -> Option<DVec3> {
        self.heliocentric_of(self.catalog.get(body)?, t)
    }

    fn sun_barycentric(&self, t: SimTime) -> DVec3 {
        -self.barycenter_heliocentric(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::OrbitalElements;
    use orrery_math::units::{SECONDS_PER_DAY, light_years_to_au};

    fn ephemeris() -> KeplerianEphemeris {
        KeplerianEphemeris::new(BodyCatalog::solar_system().unwrap())
    }

    #[test]
    fn test_sun_at_origin() {
        let eph = ephemeris();
        let t = SimTime::from_days_since_j2000(1234.5);
        assert_eq!(eph.heliocentric("Sun", t), Some(DVec3::ZERO));
    }

    #[test]
    fn test_missing_body_is_absent() {
        let eph = ephemeris();
        assert_eq!(eph.heliocentric("Vulcan", SimTime::J2000), None);
        assert_eq!(eph.barycentric("Vulcan", SimTime::J2000), None);
    }

    #[test]
    fn test_planet_distances_within_orbit_bounds() {
        let eph = ephemeris();
        let t = SimTime::from_days_since_j2000(8_000.0);
        for body in eph.catalog().of_kind(BodyKind::Planet) {
            let el = body.elements().unwrap();
            let r = eph.heliocentric(&body.name, t).unwrap().length();
            assert!(
                r >= el.periapsis_distance() - 1e-9 && r <= el.apoapsis_distance() + 1e-9,
                "{}: r={r}",
                body.name
            );
        }
    }

    #[test]
    fn test_earth_at_j2000_roughly_opposite_sun() {
        // Around Jan 1 the Earth sits near ecliptic longitude 100°.
        let eph = ephemeris();
        let earth = eph.heliocentric("Earth", SimTime::J2000).unwrap();
        let lon = earth.y.atan2(earth.x).to_degrees().rem_euclid(360.0);
        assert!((lon - 100.4).abs() < 2.0, "longitude {lon}");
    }

    #[test]
    fn test_moon_orbits_earth() {
        let eph = ephemeris();
        let t = SimTime::from_days_since_j2000(42.0);
        let earth = eph.heliocentric("Earth", t).unwrap();
        let moon = eph.heliocentric("Moon", t).unwrap();
        let km = orrery_math::units::au_to_km((moon - earth).length());
        assert!((356_000.0..407_000.0).contains(&km), "Earth-Moon distance {km} km");
    }

    #[test]
    fn test_fixed_object_does_not_move() {
        let eph = ephemeris();
        let a = eph.heliocentric("Andromeda Galaxy", SimTime::J2000).unwrap();
        let b = eph
            .heliocentric("Andromeda Galaxy", SimTime::from_days_since_j2000(1e5))
            .unwrap();
        assert_eq!(a, b);
        assert!((a.length() - light_years_to_au(2.537e6)).abs() / a.length() < 1e-12);
    }

    #[test]
    fn test_barycenter_dominated_by_jupiter() {
        // The Sun wobbles around the barycenter by up to ~2 solar radii,
        // about 0.01 AU; Jupiter alone accounts for ~0.005 AU.
        let eph = ephemeris();
        for day in [0.0, 1_000.0, 3_000.0, 6_000.0] {
            let offset = eph.sun_barycentric(SimTime::from_days_since_j2000(day)).length();
            assert!((0.0005..0.012).contains(&offset), "day {day}: {offset} AU");
        }
    }

    #[test]
    fn test_barycentric_is_heliocentric_plus_sun_offset() {
        let eph = ephemeris();
        let t = SimTime::from_days_since_j2000(500.0);
        let helio = eph.heliocentric("Mars", t).unwrap();
        let bary = eph.barycentric("Mars", t).unwrap();
        assert!((bary - helio - eph.sun_barycentric(t)).length() < 1e-15);
    }

    fn stationary_chain(hops: usize) -> BodyCatalog {
        let bodies = (0..=hops)
            .map(|i| Body {
                name: format!("B{i}"),
                kind: BodyKind::Moon,
                placement: Placement::Fixed {
                    direction: DVec3::X,
                    distance_au: 1.0,
                },
                parent: (i > 0).then(|| format!("B{}", i - 1)),
                radius_km: 1.0,
                mass_kg: 0.0,
            })
            .collect();
        BodyCatalog::from_bodies(bodies).unwrap()
    }

    #[test]
    fn test_deepest_accepted_chain_has_position() {
        let eph = KeplerianEphemeris::new(stationary_chain(MAX_PARENT_DEPTH));
        let leaf = format!("B{MAX_PARENT_DEPTH}");
        let position = eph.heliocentric(&leaf, SimTime::J2000).unwrap();
        assert_eq!(position, DVec3::X * (MAX_PARENT_DEPTH + 1) as f64);
    }

    #[test]
    fn test_massless_catalog_has_sun_at_barycenter() {
        let body = Body {
            name: "Probe".into(),
            kind: BodyKind::Planet,
            placement: Placement::Orbit(OrbitalElements {
                semi_major_axis: 1.0,
                eccentricity: 0.0,
                inclination: 0.0,
                longitude_ascending: 0.0,
                argument_periapsis: 0.0,
                mean_anomaly_epoch: 0.0,
                epoch: SimTime::J2000,
                orbital_period: 365.25 * SECONDS_PER_DAY,
            }),
            parent: None,
            radius_km: 1.0,
            mass_kg: 0.0,
        };
        let eph = KeplerianEphemeris::new(BodyCatalog::from_bodies(vec![body]).unwrap());
        assert_eq!(eph.sun_barycentric(SimTime::J2000), DVec3::ZERO);
    }
}
