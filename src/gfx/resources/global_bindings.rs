//! Global uniform bindings for camera and scene data
//!
//! One uniform buffer holds everything shared by the body and grid
//! pipelines. It is bound to group 0 in every pipeline.

use cgmath::{InnerSpace, Vector3};

use crate::config::RenderConfig;
use crate::gfx::camera::{convert_matrix4_to_array, Camera, PanCamera};

/// Global uniform buffer content
///
/// MUST match the `Globals` struct in `gravity.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    /// Camera position (homogeneous coordinates)
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
    /// Direction the light travels, w unused
    pub light_direction: [f32; 4],
    pub wire_color: [f32; 4],
    pub grid_color: [f32; 4],
}

impl GlobalUBOContent {
    pub fn new(camera: &PanCamera, render: &RenderConfig) -> Self {
        let light = Vector3::new(-0.4f32, -1.0, -0.3).normalize();
        Self {
            view_position: camera.eye_position(),
            view_proj: convert_matrix4_to_array(camera.build_view_projection_matrix()),
            light_direction: [light.x, light.y, light.z, 0.0],
            wire_color: render.foreground.to_array(),
            grid_color: render.grid_color.to_array(),
        }
    }
}

/// Uniform buffer plus the bind group that exposes it at group 0
pub struct GlobalBindings {
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    previous_content: Option<GlobalUBOContent>,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("UniformBuffer: GlobalUBOContent"),
            size: std::mem::size_of::<GlobalUBOContent>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            bind_group_layout,
            bind_group,
            previous_content: None,
        }
    }

    /// Writes `content` unless it equals what the buffer already holds
    pub fn update(&mut self, queue: &wgpu::Queue, content: GlobalUBOContent) {
        if self.previous_content == Some(content) {
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&content));
        self.previous_content = Some(content);
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
