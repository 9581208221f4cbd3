//! 2D affine transform composed into a 3x3 world matrix.

use glam::{Mat3, Vec2};

/// Position, rotation, and uniform scale composed into a world matrix
/// mapping a shape's local-space vertices into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    position: Vec2,
    rotation: f32,
    scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Create a transform from position, rotation (radians), and uniform
    /// scale.
    #[must_use]
    pub fn new(position: Vec2, rotation: f32, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// World matrix: scale, then rotation, then translation.
    #[must_use]
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_scale_angle_translation(
            Vec2::splat(self.scale),
            self.rotation,
            self.position,
        )
    }

    /// Accumulate `delta` radians of rotation.
    pub fn rotate(&mut self, delta: f32) {
        self.rotation += delta;
    }

    /// Current world-space position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move to the given world-space position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the uniform scale.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn identity_by_default() {
        assert_eq!(Transform2D::default().matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform2D::new(Vec2::new(0.25, 0.25), 0.0, 0.25);
        let p = t.matrix().transform_point2(Vec2::new(1.0, 1.0));
        assert!((p - Vec2::new(0.5, 0.5)).length() < 1e-6);
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let t = Transform2D::new(Vec2::ZERO, FRAC_PI_2, 1.0);
        let p = t.matrix().transform_point2(Vec2::X);
        assert!((p - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn rotation_accumulates() {
        let mut t = Transform2D::default();
        t.rotate(0.5);
        t.rotate(0.25);
        assert!((t.rotation() - 0.75).abs() < 1e-6);
    }
}
