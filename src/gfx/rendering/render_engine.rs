//! WGPU-based rendering engine
//!
//! Owns the surface, device and every pipeline. A frame is one pass that
//! clears to the background color and draws the grid, the bodies and their
//! wireframes, followed by an optional UI pass.

use std::sync::Arc;
use winit::window::Window;

use super::body_renderer::BodyRenderer;
use super::grid_renderer::GridRenderer;
use super::pipeline_manager::{PipelineConfig, PipelineManager};
use super::vertex::{BodyInstance, Vertex3D};
use crate::config::RenderConfig;
use crate::error::{GravityError, Result};
use crate::gfx::camera::PanCamera;
use crate::gfx::resources::{DepthBuffer, GlobalBindings, GlobalUBOContent};
use crate::simulation::{Body, Color};

const BODY_PIPELINE: &str = "Bodies";
const WIRE_PIPELINE: &str = "Body Wireframes";
const GRID_PIPELINE: &str = "Ground Grid";

/// Whether a frame reached the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// The surface was not ready; the frame was dropped
    Skipped,
}

pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_buffer: DepthBuffer,
    format: wgpu::TextureFormat,
    pipeline_manager: PipelineManager,
    global_bindings: GlobalBindings,
    body_renderer: BodyRenderer,
    grid_renderer: GridRenderer,
    render_config: RenderConfig,
}

impl RenderEngine {
    /// Creates a render engine drawing into `window`
    ///
    /// `max_bodies` sizes the instance buffer.
    pub async fn new(
        window: Arc<Window>,
        render_config: &RenderConfig,
        max_bodies: usize,
    ) -> Result<RenderEngine> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Gravity Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or_else(|| GravityError::Render("surface reports no formats".to_string()))?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_buffer = DepthBuffer::new(&device, config.width, config.height);
        let global_bindings = GlobalBindings::new(&device);

        let mut pipeline_manager = PipelineManager::new();
        pipeline_manager.load_shader(&device, "gravity", include_str!("shaders/gravity.wgsl"));
        register_pipelines(&mut pipeline_manager, &global_bindings, format);
        pipeline_manager.create_all_pipelines(&device)?;

        let body_renderer = BodyRenderer::new(
            &device,
            render_config,
            u32::try_from(max_bodies).unwrap_or(u32::MAX),
        );
        let grid_renderer = GridRenderer::new(&device, render_config);

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            depth_buffer,
            format,
            pipeline_manager,
            global_bindings,
            body_renderer,
            grid_renderer,
            render_config: render_config.clone(),
        })
    }

    /// Draws one frame of `bodies` seen from `camera`, then runs `ui_callback`
    ///
    /// Lost or outdated surfaces are reconfigured and the frame is skipped, as
    /// is a timed-out surface. Other surface errors are returned.
    pub fn render_frame<F>(
        &mut self,
        bodies: &[Body],
        camera: &PanCamera,
        ui_callback: F,
    ) -> Result<FrameStatus>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView) -> Result<()>,
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(FrameStatus::Skipped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out waiting for the surface, skipping frame");
                return Ok(FrameStatus::Skipped);
            }
            Err(error) => return Err(error.into()),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.global_bindings
            .update(&self.queue, GlobalUBOContent::new(camera, &self.render_config));
        self.body_renderer.update_instances(&self.queue, bodies);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(to_wgpu_color(self.render_config.background)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.depth_buffer.view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            if let Some(grid) = self.pipeline_manager.get_pipeline(GRID_PIPELINE) {
                self.grid_renderer.render(&mut render_pass, grid);
            }

            if let (Some(fill), Some(wire)) = (
                self.pipeline_manager.get_pipeline(BODY_PIPELINE),
                self.pipeline_manager.get_pipeline(WIRE_PIPELINE),
            ) {
                self.body_renderer.render(&mut render_pass, fill, wire);
            }
        }

        ui_callback(&self.device, &self.queue, &mut encoder, &surface_texture_view)?;

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(FrameStatus::Presented)
    }

    /// Resizes the surface and recreates the depth buffer; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_buffer.resize(&self.device, width, height);
    }

    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn drawn_bodies(&self) -> u32 {
        self.body_renderer.instance_count()
    }
}

fn register_pipelines(
    pipeline_manager: &mut PipelineManager,
    global_bindings: &GlobalBindings,
    format: wgpu::TextureFormat,
) {
    let base = PipelineConfig::default()
        .with_shader("gravity")
        .with_color_format(format)
        .with_bind_group_layouts(vec![global_bindings.bind_group_layout().clone()]);

    pipeline_manager.register_pipeline(
        BODY_PIPELINE,
        base.clone()
            .with_label("BODIES")
            .with_entry_points("vs_body", "fs_body")
            .with_vertex_buffers(vec![Vertex3D::desc(), BodyInstance::desc()])
            .with_cull_mode(None)
            .with_depth(DepthBuffer::FORMAT, wgpu::CompareFunction::Less),
    );

    pipeline_manager.register_pipeline(
        WIRE_PIPELINE,
        base.clone()
            .with_label("BODY WIREFRAMES")
            .with_entry_points("vs_wire", "fs_wire")
            .with_vertex_buffers(vec![Vertex3D::desc(), BodyInstance::desc()])
            .with_primitive_topology(wgpu::PrimitiveTopology::LineList)
            .with_cull_mode(None)
            .with_depth(DepthBuffer::FORMAT, wgpu::CompareFunction::LessEqual),
    );

    pipeline_manager.register_pipeline(
        GRID_PIPELINE,
        base.with_label("GROUND GRID")
            .with_entry_points("vs_grid", "fs_grid")
            .with_vertex_buffers(vec![Vertex3D::desc()])
            .with_primitive_topology(wgpu::PrimitiveTopology::LineList)
            .with_cull_mode(None)
            .with_depth(DepthBuffer::FORMAT, wgpu::CompareFunction::Less),
    );
}

fn to_wgpu_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(color.r),
        g: f64::from(color.g),
        b: f64::from(color.b),
        a: f64::from(color.a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_color_conversion() {
        let color = to_wgpu_color(Color::BLACK);
        assert_eq!(color, wgpu::Color::BLACK);

        let white = to_wgpu_color(Color::WHITE);
        assert_eq!(white, wgpu::Color::WHITE);
    }
}
