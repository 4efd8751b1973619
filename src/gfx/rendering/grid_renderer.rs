use wgpu::{Device, RenderPass, RenderPipeline};

use super::mesh::GpuMesh;
use crate::config::RenderConfig;
use crate::gfx::geometry::generate_grid;

/// Ground grid on the XZ plane, drawn as a line list
pub struct GridRenderer {
    mesh: GpuMesh,
}

impl GridRenderer {
    pub fn new(device: &Device, config: &RenderConfig) -> Self {
        let geometry = generate_grid(config.grid_slices, config.grid_spacing);
        Self {
            mesh: GpuMesh::new(device, "Ground Grid", &geometry),
        }
    }

    pub fn render(&self, render_pass: &mut RenderPass<'_>, pipeline: &RenderPipeline) {
        render_pass.set_pipeline(pipeline);
        self.mesh.bind(render_pass);
        render_pass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }
}
