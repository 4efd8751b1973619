//! Instanced rendering of bodies
//!
//! Every active body is one instance of a unit sphere, drawn twice: filled
//! with its own color, then as a wireframe in the foreground color.

use wgpu::{Buffer, Device, Queue, RenderPass, RenderPipeline};

use super::mesh::GpuMesh;
use super::vertex::BodyInstance;
use crate::config::RenderConfig;
use crate::gfx::geometry::{generate_sphere, generate_sphere_wireframe};
use crate::simulation::Body;

pub struct BodyRenderer {
    sphere: GpuMesh,
    wireframe: GpuMesh,
    instance_buffer: Buffer,
    max_instances: u32,
    current_instance_count: u32,
}

impl BodyRenderer {
    pub fn new(device: &Device, config: &RenderConfig, max_instances: u32) -> Self {
        let sphere = GpuMesh::new(
            device,
            "Body Sphere",
            &generate_sphere(config.sphere_segments, config.sphere_segments / 2),
        );
        let wireframe = GpuMesh::new(
            device,
            "Body Wireframe",
            &generate_sphere_wireframe(config.wire_rings, config.wire_slices),
        );

        let max_instances = max_instances.max(1);
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Body Instance Buffer"),
            size: u64::from(max_instances) * std::mem::size_of::<BodyInstance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            sphere,
            wireframe,
            instance_buffer,
            max_instances,
            current_instance_count: 0,
        }
    }

    /// Uploads the active bodies; inactive slots are not drawn
    pub fn update_instances(&mut self, queue: &Queue, bodies: &[Body]) {
        let instances = collect_instances(bodies, self.max_instances as usize);
        self.current_instance_count = instances.len() as u32;

        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
    }

    pub fn render(
        &self,
        render_pass: &mut RenderPass<'_>,
        fill_pipeline: &RenderPipeline,
        wire_pipeline: &RenderPipeline,
    ) {
        if self.current_instance_count == 0 {
            return;
        }

        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        render_pass.set_pipeline(fill_pipeline);
        self.sphere.bind(render_pass);
        render_pass.draw_indexed(0..self.sphere.index_count, 0, 0..self.current_instance_count);

        render_pass.set_pipeline(wire_pipeline);
        self.wireframe.bind(render_pass);
        render_pass.draw_indexed(
            0..self.wireframe.index_count,
            0,
            0..self.current_instance_count,
        );
    }

    pub fn instance_count(&self) -> u32 {
        self.current_instance_count
    }
}

fn collect_instances(bodies: &[Body], limit: usize) -> Vec<BodyInstance> {
    bodies
        .iter()
        .filter(|body| body.is_active())
        .take(limit)
        .map(BodyInstance::from_body)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Color, ScenePreset};
    use cgmath::Vector3;

    #[test]
    fn test_only_active_bodies_become_instances() {
        let mut bodies = ScenePreset::DenseCore.bodies();
        bodies.push(Body::inactive());
        bodies[1].deactivate();

        let instances = collect_instances(&bodies, 50);

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].position_radius[..3], [7.0, 0.0, 3.0]);
    }

    #[test]
    fn test_instances_are_capped() {
        let bodies: Vec<Body> = (0..10)
            .map(|i| {
                Body::new(
                    Vector3::new(i as f32 * 10.0, 0.0, 0.0),
                    Vector3::new(0.0, 0.0, 0.0),
                    1.0,
                    1.0,
                    Color::WHITE,
                )
            })
            .collect();

        assert_eq!(collect_instances(&bodies, 4).len(), 4);
    }
}
