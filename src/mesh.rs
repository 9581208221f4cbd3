//! Square mesh data shared by the renderer.

/// Single vertex attribute: a 2D local-space position at shader location 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Local-space position.
    pub position: [f32; 2],
}

/// Square corners in local space:
///
/// ```text
/// [0]------[1]
///  |        |
///  |        |
/// [2]------[3]
/// ```
pub const SQUARE_VERTICES: [Vertex; 4] = [
    Vertex {
        position: [-1.0, 1.0],
    },
    Vertex {
        position: [1.0, 1.0],
    },
    Vertex {
        position: [-1.0, -1.0],
    },
    Vertex {
        position: [1.0, -1.0],
    },
];

/// Two triangles covering the square.
pub const SQUARE_INDICES: [u16; 6] = [0, 1, 2, 3, 2, 1];

impl Vertex {
    /// Vertex buffer layout for the render pipeline.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_in_bounds() {
        assert!(SQUARE_INDICES
            .iter()
            .all(|&i| (i as usize) < SQUARE_VERTICES.len()));
    }

    #[test]
    fn two_triangles_cover_all_corners() {
        let mut used: Vec<u16> = SQUARE_INDICES.to_vec();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3]);
    }

    #[test]
    fn vertex_stride_matches_attribute() {
        assert_eq!(size_of::<Vertex>(), 8);
    }
}
