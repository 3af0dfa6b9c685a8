//! Application error type.

use orrery_orbit::CatalogError;

use crate::platform::PlatformError;

/// Anything that stops the orrery from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("body catalog: {0}")]
    Catalog(#[from] CatalogError),
}
