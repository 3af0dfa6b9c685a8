//! Config hot-reload for the host loop.

use std::path::PathBuf;

use orrery_config::{CliArgs, Config};
use tracing::warn;

/// Polls `config.ron` and yields the effective config when the file changes.
///
/// Change detection compares against the file as last read, so CLI
/// overrides never count as a change. Overrides are re-applied on top of
/// every reloaded file.
pub struct ConfigReloader {
    config_dir: PathBuf,
    on_disk: Config,
    overrides: CliArgs,
}

impl ConfigReloader {
    pub fn new(config_dir: impl Into<PathBuf>, on_disk: Config, overrides: CliArgs) -> Self {
        Self {
            config_dir: config_dir.into(),
            on_disk,
            overrides,
        }
    }

    /// The config as of the last successful read, before CLI overrides.
    pub fn on_disk(&self) -> &Config {
        &self.on_disk
    }

    /// Re-read the file. Returns the new effective config if it changed.
    /// Read and parse failures are logged and keep the previous config.
    pub fn poll(&mut self) -> Option<Config> {
        match self.on_disk.reload(&self.config_dir) {
            Ok(Some(new)) => {
                let mut effective = new.clone();
                effective.apply_cli_overrides(&self.overrides);
                self.on_disk = new;
                Some(effective)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Keeping current config: {e}");
                None
            }
        }
    }
}
