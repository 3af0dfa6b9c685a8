//! Configuration for the orrery.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and support hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, EphemerisConfig, HostConfig, SimulationConfig};
pub use error::ConfigError;
