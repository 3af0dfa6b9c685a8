//! Distance and time units used throughout the simulation.
//!
//! Positions are carried in astronomical units; these constants convert to
//! and from the other scales the scene has to span.

/// 1 Astronomical Unit in meters (IAU 2012 exact definition).
pub const METERS_PER_AU: f64 = 149_597_870_700.0;

/// 1 Astronomical Unit in kilometers.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// 1 light-year in meters (IAU: exactly 9,460,730,472,580,800 m).
pub const METERS_PER_LIGHT_YEAR: f64 = 9_460_730_472_580_800.0;

/// Astronomical units per light-year (≈ 63,241).
pub const AU_PER_LIGHT_YEAR: f64 = METERS_PER_LIGHT_YEAR / METERS_PER_AU;

/// 1 parsec in meters.
pub const METERS_PER_PARSEC: f64 = 30_856_775_814_913_673.0;

/// Speed of light in vacuum, m/s (exact).
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Seconds in one Julian year.
pub const SECONDS_PER_JULIAN_YEAR: f64 = DAYS_PER_JULIAN_YEAR * SECONDS_PER_DAY;

/// Mass of the Sun in kilograms.
pub const SOLAR_MASS_KG: f64 = 1.988_47e30;

/// Convert kilometers to astronomical units.
pub fn km_to_au(km: f64) -> f64 {
    km / KM_PER_AU
}

/// Convert astronomical units to kilometers.
pub fn au_to_km(au: f64) -> f64 {
    au * KM_PER_AU
}

/// Convert light-years to astronomical units.
pub fn light_years_to_au(ly: f64) -> f64 {
    ly * AU_PER_LIGHT_YEAR
}

/// Convert astronomical units to light-years.
pub fn au_to_light_years(au: f64) -> f64 {
    au / AU_PER_LIGHT_YEAR
}

/// Convert parsecs to astronomical units.
pub fn parsecs_to_au(pc: f64) -> f64 {
    pc * METERS_PER_PARSEC / METERS_PER_AU
}

/// One-way light travel time, in seconds, across `au` astronomical units.
pub fn light_time_seconds(au: f64) -> f64 {
    au * METERS_PER_AU / SPEED_OF_LIGHT_M_S
}

/// Format a view distance in AU as a human-readable string, choosing the
/// most appropriate unit.
///
/// Examples:
/// - 5.2 -> "5.20 AU"
/// - 63_241.1 -> "1.0 ly"
/// - 2.5e6 ly -> "2.50 Mly"
pub fn format_view_distance(au: f64) -> String {
    let ly = au_to_light_years(au);
    if ly < 0.01 {
        format!("{au:.2} AU")
    } else if ly < 1.0 {
        format!("{ly:.3} ly")
    } else if ly < 1_000.0 {
        format!("{ly:.1} ly")
    } else if ly < 1_000_000.0 {
        format!("{:.2} kly", ly / 1_000.0)
    } else if ly < 1_000_000_000.0 {
        format!("{:.2} Mly", ly / 1_000_000.0)
    } else {
        format!("{:.2} Gly", ly / 1_000_000_000.0)
    }
}
