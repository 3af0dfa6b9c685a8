//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Headless solar-system orrery")]
pub struct CliArgs {
    /// Acceleration multiplier (simulated days per second at the base rate).
    #[arg(long)]
    pub rate: Option<f64>,

    /// Follow the wall clock (true) or run accelerated (false).
    #[arg(long)]
    pub real_time: Option<bool>,

    /// Start paused.
    #[arg(long)]
    pub paused: Option<bool>,

    /// Start time in days relative to J2000.0.
    #[arg(long, allow_hyphen_values = true)]
    pub start_days: Option<f64>,

    /// Apply light-time correction.
    #[arg(long)]
    pub light_time: Option<bool>,

    /// Report barycentric positions.
    #[arg(long)]
    pub barycentric: Option<bool>,

    /// Observer body for light-time correction.
    #[arg(long)]
    pub observer: Option<String>,

    /// Frames to run before exiting (0 = until interrupted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Body catalog file (RON) replacing the built-in solar system.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rate) = args.rate {
            self.simulation.rate = rate;
        }
        if let Some(real_time) = args.real_time {
            self.simulation.real_time = real_time;
        }
        if let Some(paused) = args.paused {
            self.simulation.start_paused = paused;
        }
        if let Some(days) = args.start_days {
            self.simulation.start_days_since_j2000 = Some(days);
        }
        if let Some(light_time) = args.light_time {
            self.ephemeris.light_time_correction = light_time;
        }
        if let Some(barycentric) = args.barycentric {
            self.ephemeris.barycentric = barycentric;
        }
        if let Some(ref observer) = args.observer {
            self.ephemeris.observer = observer.clone();
        }
        if let Some(frames) = args.frames {
            self.host.frames = frames;
        }
        if let Some(ref catalog) = args.catalog {
            self.ephemeris.catalog_path = Some(catalog.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            rate: Some(100.0),
            real_time: Some(false),
            light_time: Some(true),
            observer: Some("Mars".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.rate, 100.0);
        assert!(!config.simulation.real_time);
        assert!(config.ephemeris.light_time_correction);
        assert_eq!(config.ephemeris.observer, "Mars");
        // Non-overridden fields retain defaults
        assert!(!config.ephemeris.barycentric);
        assert_eq!(config.host.frames, 600);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "orrery",
            "--rate",
            "365",
            "--real-time",
            "false",
            "--start-days",
            "-1000.5",
            "--barycentric",
            "true",
            "--frames",
            "10",
        ]);
        assert_eq!(args.rate, Some(365.0));
        assert_eq!(args.real_time, Some(false));
        assert_eq!(args.start_days, Some(-1000.5));
        assert_eq!(args.barycentric, Some(true));
        assert_eq!(args.frames, Some(10));
        assert!(args.catalog.is_none());
    }
}
