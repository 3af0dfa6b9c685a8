//! Orrery host: session context, frame loop, and platform plumbing.

pub mod error;
pub mod frame_loop;
pub mod platform;
pub mod reload;
pub mod session;


pub use error::AppError;
pub use frame_loop::{FrameLoop, MAX_FRAME_TIME};
pub use platform::{PlatformDirs, PlatformError};
pub use reload::ConfigReloader;
pub use session::{BodyFrame, FrameSnapshot, OrbitSummary, Session};
