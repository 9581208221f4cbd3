use glam::{Mat3, Vec2};

/// 2D camera defined by a world-space position.
///
/// A world matrix moves an object from local space into world space; a
/// camera does the exact opposite, moving everything else from world space
/// into camera-local space. For a pure translation that inverse is the
/// same matrix with negated translation values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera2D {
    /// Camera position in world space.
    pub position: Vec2,
}

/// GPU uniform buffer holding the view matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View matrix columns, vec4-padded (WGSL `mat3x3<f32>` layout).
    pub view: [[f32; 4]; 3],
}

/// Pad a [`Mat3`] into the vec4-aligned column layout WGSL expects for
/// `mat3x3<f32>` uniforms.
pub(crate) fn mat3_to_gpu(m: Mat3) -> [[f32; 4]; 3] {
    let c = m.to_cols_array_2d();
    [
        [c[0][0], c[0][1], c[0][2], 0.0],
        [c[1][0], c[1][1], c[1][2], 0.0],
        [c[2][0], c[2][1], c[2][2], 0.0],
    ]
}

impl Camera2D {
    /// Create a camera at the given world position.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Build the view matrix: the inverse of the camera's translation.
    #[must_use]
    pub fn view_matrix(&self) -> Mat3 {
        Mat3::from_translation(-self.position)
    }

    /// Accumulate `direction * amount` into the camera position.
    pub fn pan(&mut self, direction: Vec2, amount: f32) {
        self.position += direction * amount;
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with an identity view matrix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: mat3_to_gpu(Mat3::IDENTITY),
        }
    }

    /// Update the uniform from the given camera's current state.
    pub fn update_view(&mut self, camera: &Camera2D) {
        self.view = mat3_to_gpu(camera.view_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_at_origin_is_identity() {
        assert_eq!(Camera2D::default().view_matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn view_translation_negates_accumulated_offset() {
        // Pan the way held W/A/S/D keys would over a few frames.
        let mut camera = Camera2D::default();
        camera.pan(Vec2::Y, 0.016);
        camera.pan(Vec2::Y, 0.016);
        camera.pan(Vec2::X, 0.02);
        camera.pan(-Vec2::X, 0.005);

        let m = camera.view_matrix().to_cols_array_2d();
        assert!((m[2][0] - -camera.position.x).abs() < 1e-6);
        assert!((m[2][1] - -camera.position.y).abs() < 1e-6);
        // Upper-left block stays identity.
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert_eq!(m[0][1], 0.0);
        assert_eq!(m[1][0], 0.0);
    }

    #[test]
    fn view_undoes_camera_translation() {
        let camera = Camera2D::new(Vec2::new(3.0, -2.0));
        let p = camera.view_matrix().transform_point2(camera.position);
        assert!(p.length() < 1e-6);
    }

    #[test]
    fn uniform_columns_are_vec4_padded() {
        let mut uniform = CameraUniform::new();
        uniform.update_view(&Camera2D::new(Vec2::new(1.5, 2.5)));
        assert_eq!(uniform.view[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(uniform.view[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(uniform.view[2], [-1.5, -2.5, 1.0, 0.0]);
    }
}
