//! # Vertex Data Structures
//!
//! GPU-compatible vertex and instance formats used by the body and grid
//! pipelines.

use crate::simulation::Body;

/// A 3D vertex with position and normal data.
///
/// `#[repr(C)]` keeps the layout stable for buffer uploads.
///
/// ```no_run
/// use gravity::gfx::rendering::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// Attribute 0 is the position, attribute 1 the normal.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Per-body instance data: center and radius packed together, plus color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position_radius: [f32; 4],
    pub color: [f32; 4],
}

impl BodyInstance {
    pub fn from_body(body: &Body) -> Self {
        Self {
            position_radius: [
                body.position.x,
                body.position.y,
                body.position.z,
                body.radius(),
            ],
            color: body.color.to_array(),
        }
    }

    /// Attribute 2 is center and radius, attribute 3 the color.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<BodyInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Color;
    use cgmath::Vector3;

    #[test]
    fn test_instance_packs_position_and_radius() {
        let body = Body::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, 0.0),
            8.0,
            1.0,
            Color::GREEN,
        );

        let instance = BodyInstance::from_body(&body);

        assert_eq!(instance.position_radius[..3], [1.0, 2.0, 3.0]);
        assert_eq!(instance.position_radius[3], body.radius());
        assert_eq!(instance.color, Color::GREEN.to_array());
    }

    #[test]
    fn test_layouts_match_struct_sizes() {
        assert_eq!(Vertex3D::desc().array_stride, 24);
        assert_eq!(BodyInstance::desc().array_stride, 32);
    }
}
