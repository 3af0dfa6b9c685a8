//! Reference frames and the heliocentric/barycentric selector.

use glam::DVec3;
use orrery_math::SimTime;

use crate::ephemeris::Ephemeris;

/// The frame a [`Position`] is expressed in. All share ecliptic J2000 axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Origin at the Sun's center.
    Heliocentric,
    /// Origin at the solar-system barycenter.
    Barycentric,
    /// Origin at the observer body (usually Earth).
    Geocentric,
}

/// A position in AU, tagged with its frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub vector: DVec3,
    pub frame: Frame,
}

impl Position {
    pub fn new(vector: DVec3, frame: Frame) -> Self {
        Self { vector, frame }
    }

    /// Distance from the frame origin, in AU.
    pub fn distance_au(&self) -> f64 {
        self.vector.length()
    }

    /// This position seen from `observer`. Both must share a frame.
    pub fn relative_to(&self, observer: &Position) -> Position {
        debug_assert_eq!(self.frame, observer.frame, "mixing frames");
        Position::new(self.vector - observer.vector, Frame::Geocentric)
    }
}

/// Heliocentric or barycentric position of `body`, chosen by one flag.
pub fn select_frame<E>(ephemeris: &E, body: &str, t: SimTime, barycentric: bool) -> Option<Position>
where
    E: Ephemeris + ?Sized,
{
    if barycentric {
        ephemeris
            .barycentric(body, t)
            .map(|v| Position::new(v, Frame::Barycentric))
    } else {
        ephemeris
            .heliocentric(body, t)
            .map(|v| Position::new(v, Frame::Heliocentric))
    }
}
