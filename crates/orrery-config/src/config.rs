//! Orrery settings with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Clock settings.
    pub simulation: SimulationConfig,
    /// Position-query settings.
    pub ephemeris: EphemerisConfig,
    /// Headless host loop settings.
    pub host: HostConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Follow the wall clock instead of accelerated playback.
    pub real_time: bool,
    /// Acceleration multiplier for accelerated mode.
    pub rate: f64,
    /// Simulated days per real second at rate 1.
    pub days_per_second: f64,
    /// Start with the clock paused.
    pub start_paused: bool,
    /// Starting time in days relative to J2000.0. `None` starts at the wall clock.
    pub start_days_since_j2000: Option<f64>,
}

/// Position query configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Apply light-time correction.
    pub light_time_correction: bool,
    /// Report barycentric rather than heliocentric positions.
    pub barycentric: bool,
    /// Body light-time is measured from.
    pub observer: String,
    /// Fixed-point rounds allowed for the light-time solver.
    pub light_time_max_iterations: u32,
    /// Light-time convergence tolerance in seconds.
    pub light_time_tolerance_seconds: f64,
    /// Segments per sampled orbit path.
    pub orbit_path_segments: usize,
    /// Catalog file replacing the built-in solar system.
    pub catalog_path: Option<PathBuf>,
}

/// Headless host loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Frames to run before exiting (0 = until interrupted).
    pub frames: u64,
    /// Target frame interval in milliseconds.
    pub frame_interval_ms: u64,
    /// Log a position report every N frames (0 = never).
    pub report_every: u64,
    /// Camera distance in scene units used for the HUD line.
    pub camera_distance: f64,
    /// Re-read `config.ron` every N frames (0 = never).
    pub reload_every: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            real_time: true,
            rate: 1.0,
            days_per_second: 1.0,
            start_paused: false,
            start_days_since_j2000: None,
        }
    }
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            light_time_correction: false,
            barycentric: false,
            observer: "Earth".to_string(),
            light_time_max_iterations: 5,
            light_time_tolerance_seconds: 1e-3,
            orbit_path_segments: 120,
            catalog_path: None,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_interval_ms: 16,
            report_every: 60,
            camera_distance: 1_250.0,
            reload_every: 120,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
