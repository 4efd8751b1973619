//! # Graphics Module
//!
//! Everything that turns the simulation into pixels:
//!
//! - **Camera** ([`camera`]) - panning perspective camera and its input controller
//! - **Geometry** ([`geometry`]) - procedural sphere, wireframe and grid meshes
//! - **Rendering** ([`rendering`]) - wgpu surface, pipelines and the frame pass
//! - **Resources** ([`resources`]) - global uniforms and the depth buffer

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;

// Re-export commonly used types
pub use camera::PanCamera;
pub use rendering::render_engine::RenderEngine;
