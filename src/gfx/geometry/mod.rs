//! # Procedural Geometry
//!
//! Meshes for the scene are generated at startup instead of loaded from
//! files:
//!
//! - **Sphere**: UV sphere drawn once per body
//! - **Sphere wireframe**: latitude/longitude lines drawn over each sphere
//! - **Grid**: square line grid on the XZ plane
//!
//! ```rust
//! use gravity::gfx::geometry::{generate_grid, generate_sphere};
//!
//! let sphere = generate_sphere(24, 16);
//! let grid = generate_grid(30, 1.0);
//! assert_eq!(grid.line_count(), 62);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::rendering::vertex::Vertex3D;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle list or line list indices, depending on the generator
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles when the indices form a triangle list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of segments when the indices form a line list
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Interleaves positions and normals into the vertex format of the renderer
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }
}
