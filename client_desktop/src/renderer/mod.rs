pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::frame::Frame;
use crate::mesh::Mesh;
use glam::Vec2;
use log::{debug, info, warn};
use resources::GpuBuffers;
use std::sync::Arc;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GpuBuffers,
    pub mesh: Mesh,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, playfield: Vec2) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::playfield(playfield.x, playfield.y);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let mesh = Mesh::quad(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        info!(
            target: "renderer",
            "Surface {}x{} ({:?})",
            ctx.config.width,
            ctx.config.height,
            ctx.config.format
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            mesh,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return; // minimized
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        debug!(target: "renderer", "Surface resized to {}x{}", width, height);
    }

    /// Present `frame`. Recoverable surface problems are logged and the frame
    /// is skipped; only running out of memory is fatal.
    pub fn render(&mut self, frame: &Frame) -> Result<(), ClientError> {
        match draw::draw_frame(self, frame) {
            Ok(()) => Ok(()),
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                warn!(target: "renderer", "Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                Ok(())
            }
            Err(SurfaceError::OutOfMemory) => Err(SurfaceError::OutOfMemory.into()),
            Err(err) => {
                warn!(target: "renderer", "Skipping frame: {}", err);
                Ok(())
            }
        }
    }

    fn ensure_instance_capacity(&mut self, needed: usize) {
        let capacity = resources::grown_capacity(self.buffers.capacity, needed);
        if capacity != self.buffers.capacity {
            debug!(target: "renderer", "Growing instance buffer to {}", capacity);
            self.buffers.instances = resources::create_instance_buffer(&self.device, capacity);
            self.buffers.capacity = capacity;
        }
    }
}
