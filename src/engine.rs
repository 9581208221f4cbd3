//! Per-window orchestration: owns the GPU context, camera, square
//! renderer, and the per-frame update/render loop.

use std::time::{Duration, Instant};

use crate::camera::controller::CameraController;
use crate::error::VantageError;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputState, KeyAction};
use crate::options::Options;
use crate::renderer::square::{load_shader_source, SquareRenderer};
use crate::transform::Transform2D;
use crate::util::frame_timing::FrameTiming;

/// How often the smoothed FPS is logged at debug level.
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

/// The demo engine: one camera, one square, one pipeline.
pub struct VantageEngine {
    /// GPU device, queue, surface, and configuration.
    pub context: RenderContext,
    /// Panning camera and its GPU resources.
    pub camera: CameraController,
    square: SquareRenderer,
    transform: Transform2D,
    input: InputState,
    frame_timing: FrameTiming,
    options: Options,
    last_fps_log: Instant,
}

impl VantageEngine {
    /// Create the GPU context and all render resources for a window.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Gpu`] when GPU initialization fails and
    /// [`VantageError::Io`] when a configured shader file cannot be read.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, VantageError> {
        let context = RenderContext::new(window, size).await?;

        let camera = CameraController::new(&context, &options.camera);

        let shader_source = load_shader_source(None)?;
        let square =
            SquareRenderer::new(&context, &camera.layout, &shader_source);

        let transform = Transform2D::new(
            options.shape.position.into(),
            0.0,
            options.shape.scale,
        );

        Ok(Self {
            context,
            camera,
            square,
            transform,
            input: InputState::new(),
            frame_timing: FrameTiming::new(),
            options,
            last_fps_log: Instant::now(),
        })
    }

    /// Reconfigure the surface for a new window size. The viewport follows
    /// the window; no aspect-ratio correction is applied.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Resolve a physical key code through the keybindings and update the
    /// held-key state. Returns the resolved action, if any.
    pub fn handle_key(
        &mut self,
        code: &str,
        pressed: bool,
    ) -> Option<KeyAction> {
        let action = self.options.keybindings.lookup(code)?;
        if pressed {
            self.input.press(action);
        } else {
            self.input.release(action);
        }
        Some(action)
    }

    /// Advance the scene by `dt` seconds: spin the square, integrate
    /// camera panning, and upload both uniform matrices.
    pub fn update(&mut self, dt: f32) {
        self.transform.rotate(self.options.shape.spin_speed * dt);
        self.camera.update(&self.input, dt);

        self.camera.update_gpu(&self.context.queue);
        self.square.update_world(
            &self.context.queue,
            &self.transform,
            self.options.shape.color,
        );
    }

    /// Draw one frame: clear to the configured color, issue the square's
    /// indexed draw, and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; the caller reconfigures on `Lost`/`Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let [r, g, b] = self.options.display.clear_color;
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Main Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

            self.square.draw(&mut render_pass, &self.camera.bind_group);
        }

        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        if self.last_fps_log.elapsed() >= FPS_LOG_INTERVAL {
            log::debug!("fps: {:.1}", self.frame_timing.fps());
            self.last_fps_log = Instant::now();
        }

        Ok(())
    }

    /// Current runtime options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
