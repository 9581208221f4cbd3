use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera movement parameters.
pub struct CameraOptions {
    /// Pan speed in world units per second.
    pub move_speed: f32,
    /// Initial camera position in world space.
    pub position: [f32; 2],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            position: [0.0, 0.0],
        }
    }
}
