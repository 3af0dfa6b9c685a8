//! Simulation timestamp.

use std::fmt;

use crate::units::SECONDS_PER_DAY;

/// Milliseconds per second.
const MILLIS_PER_SECOND: f64 = 1_000.0;

/// A point in simulated time: milliseconds since the Unix epoch (UTC).
///
/// Stored as `f64` because accelerated playback advances the cursor by
/// fractional milliseconds every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct SimTime(f64);

impl SimTime {
    /// J2000.0 reference epoch, 2000-01-01T12:00:00 UTC.
    pub const J2000: SimTime = SimTime(946_728_000_000.0);

    /// Create from milliseconds since the Unix epoch.
    pub const fn from_unix_millis(millis: f64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    pub fn unix_millis(self) -> f64 {
        self.0
    }

    /// Create from days relative to J2000.0.
    pub fn from_days_since_j2000(days: f64) -> Self {
        Self::J2000.offset_seconds(days * SECONDS_PER_DAY)
    }

    /// A new timestamp `seconds` later (or earlier when negative).
    pub fn offset_seconds(self, seconds: f64) -> Self {
        Self(self.0 + seconds * MILLIS_PER_SECOND)
    }

    /// Elapsed seconds from `earlier` to `self`. Negative if `self` precedes it.
    pub fn seconds_since(self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0) / MILLIS_PER_SECOND
    }

    /// Days elapsed since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.seconds_since(Self::J2000) / SECONDS_PER_DAY
    }

    /// Whether the underlying value is finite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.days_since_j2000();
        if days < 0.0 {
            write!(f, "J2000-{:.5}d", -days)
        } else {
            write!(f, "J2000+{:.5}d", days)
        }
    }
}
