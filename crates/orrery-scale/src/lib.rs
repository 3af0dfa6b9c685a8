//! Distance-scale mapping between physical space and the scene, plus zoom-dependent layers.

mod layers;
mod mapping;

pub use layers::{Layer, active_layers, active_layers_for_camera, hud_label};
pub use mapping::{
    LINEAR_LIMIT_AU, LOG_GAIN, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, SCENE_UNITS_PER_AU,
    ScaleConfig, physical_distance, scene_distance,
};
