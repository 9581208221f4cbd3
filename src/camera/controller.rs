use glam::Vec2;
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera2D, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::input::InputState;
use crate::options::CameraOptions;

/// Panning camera controller managing key-driven movement and GPU
/// resources.
pub struct CameraController {
    /// Camera state.
    pub camera: Camera2D,
    /// CPU copy of the GPU uniform.
    pub uniform: CameraUniform,
    /// Uniform buffer backing the camera bind group.
    pub buffer: wgpu::Buffer,
    /// Bind group layout shared with render pipelines.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group bound at draw time.
    pub bind_group: wgpu::BindGroup,

    move_speed: f32,
}

impl CameraController {
    /// Create camera GPU resources with the configured start position and
    /// pan speed.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let camera = Camera2D::new(Vec2::from(options.position));
        let mut uniform = CameraUniform::new();
        uniform.update_view(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            move_speed: options.move_speed,
        }
    }

    /// Integrate held pan keys over the frame's delta time.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let direction = input.pan_vector();
        if direction != Vec2::ZERO {
            self.camera.pan(direction, self.move_speed * dt);
        }
    }

    /// Refresh the uniform from the camera and write it to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }
}
