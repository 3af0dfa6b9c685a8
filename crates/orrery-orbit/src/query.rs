//! `position_of`: frame selection plus optional light-time correction.

use orrery_math::SimTime;

use crate::ephemeris::Ephemeris;
use crate::frame::{Frame, Position, select_frame};
use crate::light_time::{LightTimeOptions, correct_light_time, instantaneous};

/// Per-query correction flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionOptions {
    /// Report where the body was when the light now reaching the observer left it.
    pub light_time_correction: bool,
    /// Report solar-system-barycentric instead of heliocentric coordinates.
    pub barycentric: bool,
}

/// Answers position queries against an ephemeris for a fixed observer.
pub struct PositionSolver<'a, E: ?Sized> {
    ephemeris: &'a E,
    observer: &'a str,
    light_time: LightTimeOptions,
}

impl<'a, E> PositionSolver<'a, E>
where
    E: Ephemeris + ?Sized,
{
    /// `observer` is the body light-time is measured from.
    pub fn new(ephemeris: &'a E, observer: &'a str, light_time: LightTimeOptions) -> Self {
        Self {
            ephemeris,
            observer,
            light_time,
        }
    }

    /// Position of `body` at `t`. `None` when the body (or, with light-time
    /// correction on, the observer) is missing from the ephemeris.
    pub fn position_of(&self, body: &str, t: SimTime, options: PositionOptions) -> Option<Position> {
        let frame = |t: SimTime| {
            select_frame(self.ephemeris, body, t, options.barycentric).map(|p| p.vector)
        };
        let solution = if options.light_time_correction {
            let observer = |t: SimTime| {
                select_frame(self.ephemeris, self.observer, t, options.barycentric)
                    .map(|p| p.vector)
            };
            correct_light_time(&observer, &frame, t, self.light_time)?
        } else {
            instantaneous(&frame, t)?
        };
        let tag = if options.barycentric {
            Frame::Barycentric
        } else {
            Frame::Heliocentric
        };
        Some(Position::new(solution.position, tag))
    }

    /// The observer body's name.
    pub fn observer(&self) -> &str {
        self.observer
    }

    /// Position of `body` relative to the observer at `t`.
    pub fn observer_relative(&self, body: &str, t: SimTime, options: PositionOptions) -> Option<Position> {
        let target = self.position_of(body, t, options)?;
        let observer = select_frame(self.ephemeris, self.observer, t, options.barycentric)?;
        Some(target.relative_to(&observer))
    }
}
