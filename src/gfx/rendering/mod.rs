//! Core rendering functionality
//!
//! Handles render pipelines, GPU buffers and frame rendering.

pub mod body_renderer;
pub mod grid_renderer;
pub mod mesh;
pub mod pipeline_manager;
pub mod render_engine;
pub mod vertex;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::{FrameStatus, RenderEngine};
