//! The session: clock, ephemeris, and frame options owned in one place.
//!
//! Hosts call [`Session::tick`] once per frame, then
//! [`Session::compute_frame`] with the returned time. Every position in a
//! snapshot is computed against that single time.

use glam::DVec3;
use orrery_clock::{ClockMode, SimulationClock, SystemWallClock, WallClock};
use orrery_config::Config;
use orrery_math::SimTime;
use orrery_math::units::SOLAR_MASS_KG;
use orrery_orbit::{
    BodyCatalog, Ephemeris, KeplerianEphemeris, LightTimeOptions, OrbitPath, Position,
    PositionOptions, PositionSolver, kepler_period_years, mean_orbital_speed_km_s,
};
use orrery_scale::ScaleConfig;
use tracing::{debug, info, warn};

use crate::error::AppError;

/// One body's entry in a frame snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame {
    pub name: String,
    /// Physical position in AU.
    pub position: Position,
    /// Position mapped into scene units.
    pub scene_position: DVec3,
}

/// All body positions for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub bodies: Vec<BodyFrame>,
}

impl FrameSnapshot {
    pub fn get(&self, name: &str) -> Option<&BodyFrame> {
        self.bodies.iter().find(|b| b.name == name)
    }
}

/// Kepler's third law figures for an orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSummary {
    pub name: String,
    pub semi_major_axis_au: f64,
    pub period_years: f64,
    pub mean_speed_km_s: f64,
}

/// Ephemeris view for one frame: the Sun's barycentric offset is computed
/// once for the frame time and reused for every body.
struct FrameEphemeris<'a> {
    inner: &'a KeplerianEphemeris,
    time: SimTime,
    sun_offset: DVec3,
}

impl Ephemeris for FrameEphemeris<'_> {
    fn heliocentric(&self, body: &str, t: SimTime) -> Option<DVec3> {
        self.inner.heliocentric(body, t)
    }

    fn sun_barycentric(&self, t: SimTime) -> DVec3 {
        if t == self.time {
            self.sun_offset
        } else {
            self.inner.sun_barycentric(t)
        }
    }
}

/// Explicit simulation context.
pub struct Session<W = SystemWallClock> {
    clock: SimulationClock<W>,
    ephemeris: KeplerianEphemeris,
    observer: String,
    light_time: LightTimeOptions,
    options: PositionOptions,
    scale: ScaleConfig,
    orbit_segments: usize,
    orbit_paths: Vec<(String, OrbitPath)>,
}

impl<W: WallClock> Session<W> {
    /// Build a session from configuration, loading the configured catalog.
    pub fn from_config(config: &Config, wall: W) -> Result<Self, AppError> {
        let catalog = match &config.ephemeris.catalog_path {
            Some(path) => BodyCatalog::load(path)?,
            None => BodyCatalog::solar_system()?,
        };
        Ok(Self::new(config, catalog, wall))
    }

    /// Build a session around an already-loaded catalog.
    pub fn new(config: &Config, catalog: BodyCatalog, wall: W) -> Self {
        let sim = &config.simulation;
        let mut clock = SimulationClock::with_wall_clock(wall).with_days_per_second(sim.days_per_second);
        clock.set_rate(sim.rate);
        clock.set_mode(if sim.real_time {
            ClockMode::RealTime
        } else {
            ClockMode::Accelerated
        });
        if let Some(days) = sim.start_days_since_j2000 {
            clock.set_time(SimTime::from_days_since_j2000(days));
        }
        if sim.start_paused {
            clock.pause();
        }

        let eph = &config.ephemeris;
        if !catalog.contains(&eph.observer) {
            warn!(
                "Observer {:?} is not in the catalog; light-time corrected bodies will be skipped",
                eph.observer
            );
        }

        let mut session = Self {
            clock,
            ephemeris: KeplerianEphemeris::new(catalog),
            observer: eph.observer.clone(),
            light_time: LightTimeOptions {
                max_iterations: eph.light_time_max_iterations,
                tolerance_seconds: eph.light_time_tolerance_seconds,
            },
            options: PositionOptions {
                light_time_correction: eph.light_time_correction,
                barycentric: eph.barycentric,
            },
            scale: ScaleConfig::default(),
            orbit_segments: eph.orbit_path_segments,
            orbit_paths: Vec::new(),
        };
        session.sample_orbit_paths();
        info!(
            "Session ready: {} bodies, observer {}, mode {:?}, t = {}",
            session.ephemeris.catalog().len(),
            session.observer,
            session.clock.mode(),
            session.clock.current_time()
        );
        session
    }

    /// Advance the clock by one frame of wall time and return the frame's time.
    pub fn tick(&mut self, wall_delta_seconds: f64) -> SimTime {
        self.clock.tick(wall_delta_seconds)
    }

    /// Positions of every catalog body at `t`. Bodies the ephemeris cannot
    /// place are left out of the snapshot.
    pub fn compute_frame(&self, t: SimTime) -> FrameSnapshot {
        let frame_ephemeris = FrameEphemeris {
            inner: &self.ephemeris,
            time: t,
            sun_offset: if self.options.barycentric {
                self.ephemeris.sun_barycentric(t)
            } else {
                DVec3::ZERO
            },
        };
        let solver = PositionSolver::new(&frame_ephemeris, &self.observer, self.light_time);

        let mut bodies = Vec::with_capacity(self.ephemeris.catalog().len());
        for body in self.ephemeris.catalog().iter() {
            match solver.position_of(&body.name, t, self.options) {
                Some(position) => bodies.push(BodyFrame {
                    name: body.name.clone(),
                    scene_position: self.scale.scene_position(position.vector),
                    position,
                }),
                None => debug!("Skipping {} at {t}: no position", body.name),
            }
        }
        FrameSnapshot { time: t, bodies }
    }

    /// Re-sample every orbit path at `epoch`. Returns how many paths changed.
    pub fn refresh_orbit_paths(&mut self, epoch: SimTime) -> usize {
        self.orbit_paths
            .iter_mut()
            .map(|(_, path)| path.refresh(epoch))
            .filter(|&changed| changed)
            .count()
    }

    pub fn orbit_path(&self, name: &str) -> Option<&OrbitPath> {
        self.orbit_paths
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, path)| path)
    }

    /// Period and mean speed of every orbiting body, from Kepler's third law
    /// around its parent's mass.
    pub fn orbit_summaries(&self) -> Vec<OrbitSummary> {
        let catalog = self.ephemeris.catalog();
        catalog
            .iter()
            .filter_map(|body| {
                let elements = body.elements()?;
                let parent_mass = body
                    .parent
                    .as_deref()
                    .and_then(|p| catalog.get(p))
                    .map(|p| p.mass_kg)
                    .filter(|&m| m > 0.0)?;
                let mass_solar = parent_mass / SOLAR_MASS_KG;
                Some(OrbitSummary {
                    name: body.name.clone(),
                    semi_major_axis_au: elements.semi_major_axis,
                    period_years: kepler_period_years(elements.semi_major_axis, mass_solar),
                    mean_speed_km_s: mean_orbital_speed_km_s(elements.semi_major_axis, mass_solar),
                })
            })
            .collect()
    }

    /// Apply settings from a reloaded config.
    ///
    /// Clock rate and mode, observer, light-time solver and frame options
    /// take effect immediately. The current time and pause state are kept;
    /// start settings and the catalog only apply to a new session.
    pub fn apply_config(&mut self, config: &Config) {
        let sim = &config.simulation;
        self.clock.set_rate(sim.rate);
        self.clock.set_mode(if sim.real_time {
            ClockMode::RealTime
        } else {
            ClockMode::Accelerated
        });

        let eph = &config.ephemeris;
        if eph.observer != self.observer {
            if !self.ephemeris.catalog().contains(&eph.observer) {
                warn!("Observer {:?} is not in the catalog", eph.observer);
            }
            self.observer = eph.observer.clone();
        }
        self.light_time = LightTimeOptions {
            max_iterations: eph.light_time_max_iterations,
            tolerance_seconds: eph.light_time_tolerance_seconds,
        };
        self.options = PositionOptions {
            light_time_correction: eph.light_time_correction,
            barycentric: eph.barycentric,
        };
        if eph.orbit_path_segments != self.orbit_segments {
            self.orbit_segments = eph.orbit_path_segments;
            self.sample_orbit_paths();
        }
        debug!(
            "Applied config: mode {:?}, rate {}, options {:?}",
            self.clock.mode(),
            self.clock.rate(),
            self.options
        );
    }

    pub fn set_light_time_correction(&mut self, enabled: bool) {
        self.options.light_time_correction = enabled;
    }

    pub fn set_barycentric(&mut self, enabled: bool) {
        self.options.barycentric = enabled;
    }

    pub fn options(&self) -> PositionOptions {
        self.options
    }

    pub fn clock(&self) -> &SimulationClock<W> {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock<W> {
        &mut self.clock
    }

    pub fn ephemeris(&self) -> &KeplerianEphemeris {
        &self.ephemeris
    }

    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    fn sample_orbit_paths(&mut self) {
        let epoch = self.clock.current_time();
        self.orbit_paths = self
            .ephemeris
            .catalog()
            .iter()
            .filter_map(|body| {
                let elements = body.elements()?;
                Some((
                    body.name.clone(),
                    OrbitPath::sample(*elements, self.orbit_segments, epoch),
                ))
            })
            .collect();
    }
}
