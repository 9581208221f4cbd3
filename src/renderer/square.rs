//! Square renderer: one indexed draw through the world/view matrix
//! pipeline.

use std::borrow::Cow;
use std::path::Path;

use wgpu::util::DeviceExt;

use crate::camera::core::mat3_to_gpu;
use crate::error::VantageError;
use crate::gpu::render_context::RenderContext;
use crate::mesh::{Vertex, SQUARE_INDICES, SQUARE_VERTICES};
use crate::transform::Transform2D;

/// Compiled-in copy of the shader, used when the asset file is absent.
const EMBEDDED_SHADER: &str = include_str!("../../assets/shaders/square.wgsl");

/// Default on-disk location of the shader source.
const SHADER_ASSET_PATH: &str = "assets/shaders/square.wgsl";

/// GPU uniform holding the world matrix and fill color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct WorldUniform {
    /// World matrix columns, vec4-padded.
    world: [[f32; 4]; 3],
    /// Fill color (rgb + alpha).
    color: [f32; 4],
}

/// Load the WGSL shader source.
///
/// With an explicit `path` the file must exist. Otherwise the default
/// asset file is read from disk when present, falling back to the
/// compiled-in copy so the binary runs from any working directory.
///
/// # Errors
///
/// Returns [`VantageError::Io`] when an explicitly-given path cannot be
/// read.
pub fn load_shader_source(
    path: Option<&Path>,
) -> Result<Cow<'static, str>, VantageError> {
    if let Some(path) = path {
        let source = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        log::debug!("loaded shader from {}", path.display());
        return Ok(Cow::Owned(source));
    }

    let default_path = Path::new(SHADER_ASSET_PATH);
    match std::fs::read_to_string(default_path) {
        Ok(source) => {
            log::debug!("loaded shader from {}", default_path.display());
            Ok(Cow::Owned(source))
        }
        Err(_) => {
            log::debug!("shader asset not found on disk, using embedded copy");
            Ok(Cow::Borrowed(EMBEDDED_SHADER))
        }
    }
}

/// Owns the square's GPU resources: vertex/index buffers, the world
/// uniform, and the render pipeline.
pub struct SquareRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    world_buffer: wgpu::Buffer,
    world_bind_group: wgpu::BindGroup,
}

impl SquareRenderer {
    /// Upload the square mesh and build the render pipeline against the
    /// camera bind group layout.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        shader_source: &str,
    ) -> Self {
        let device = &context.device;

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Square Shader"),
                source: wgpu::ShaderSource::Wgsl(shader_source.into()),
            });

        let vertex_buffer = device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Square Vertex Buffer"),
                contents: bytemuck::cast_slice(&SQUARE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let index_buffer = device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Square Index Buffer"),
                contents: bytemuck::cast_slice(&SQUARE_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let world_uniform = WorldUniform {
            world: mat3_to_gpu(glam::Mat3::IDENTITY),
            color: [1.0, 1.0, 1.0, 1.0],
        };
        let world_buffer = device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("World Matrix Buffer"),
                contents: bytemuck::cast_slice(&[world_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let world_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("World Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let world_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &world_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: world_buffer.as_entire_binding(),
                }],
                label: Some("World Bind Group"),
            });

        let pipeline = Self::create_pipeline(
            context,
            &shader,
            camera_layout,
            &world_layout,
        );

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            world_buffer,
            world_bind_group,
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        shader: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
        world_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Square Pipeline Layout"),
                bind_group_layouts: &[camera_layout, world_layout],
                push_constant_ranges: &[],
            },
        );

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Square Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    // The square's index order winds clockwise; draw both
                    // faces rather than depend on winding.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Upload the world matrix and fill color for this frame.
    pub fn update_world(
        &self,
        queue: &wgpu::Queue,
        transform: &Transform2D,
        color: [f32; 3],
    ) {
        let uniform = WorldUniform {
            world: mat3_to_gpu(transform.matrix()),
            color: [color[0], color[1], color[2], 1.0],
        };
        queue.write_buffer(
            &self.world_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );
    }

    /// Record the square's draw: bind both matrix groups and issue one
    /// indexed draw.
    pub fn draw(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.world_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass
            .set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..SQUARE_INDICES.len() as u32, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shader_declares_both_stages() {
        assert!(EMBEDDED_SHADER.contains("fn vs_main"));
        assert!(EMBEDDED_SHADER.contains("fn fs_main"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result =
            load_shader_source(Some(Path::new("/nonexistent/square.wgsl")));
        assert!(result.is_err());
    }

    #[test]
    fn no_path_always_resolves() {
        // Either the on-disk asset or the embedded fallback.
        let source = load_shader_source(None).unwrap();
        assert!(source.contains("mat3x3<f32>"));
    }
}
