//! GPU resources shared by all pipelines

pub mod depth_buffer;
pub mod global_bindings;

pub use depth_buffer::DepthBuffer;
pub use global_bindings::{GlobalBindings, GlobalUBOContent};
