use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Square shape parameters.
pub struct ShapeOptions {
    /// Uniform scale applied to the unit square.
    pub scale: f32,
    /// World-space position of the square's center.
    pub position: [f32; 2],
    /// Spin speed in radians per second.
    pub spin_speed: f32,
    /// Fill color (linear RGB).
    pub color: [f32; 3],
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            scale: 0.25,
            position: [0.25, 0.25],
            spin_speed: 1.0,
            color: [1.0, 1.0, 1.0],
        }
    }
}
