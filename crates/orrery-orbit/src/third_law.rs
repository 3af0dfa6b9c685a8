//! Kepler's third law in solar-system units.

use std::f64::consts::TAU;

use orrery_math::units::{KM_PER_AU, SECONDS_PER_JULIAN_YEAR};

/// Orbital period in Julian years for semi-major axis `a_au` around
/// `central_mass_solar` solar masses. `P² = a³ / M`.
pub fn kepler_period_years(a_au: f64, central_mass_solar: f64) -> f64 {
    (a_au.powi(3) / central_mass_solar).sqrt()
}

/// Mean orbital speed in km/s: circumference over period.
pub fn mean_orbital_speed_km_s(a_au: f64, central_mass_solar: f64) -> f64 {
    let period_s = kepler_period_years(a_au, central_mass_solar) * SECONDS_PER_JULIAN_YEAR;
    TAU * a_au * KM_PER_AU / period_s
}
