//! Error types for the gravity visualizer
//!
//! Window and GPU initialization failures are surfaced to the caller of
//! [`GravityApp::run`](crate::app::GravityApp::run) instead of panicking inside
//! the event loop. Simulation errors cover bodies and scenes that would put the
//! body array into an invalid state.

use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, GravityError>;

#[derive(Debug, Error)]
pub enum GravityError {
    #[error("failed to create or run the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create a rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to acquire a graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to acquire the next surface texture: {0}")]
    SurfaceTexture(#[from] wgpu::SurfaceError),

    #[error("render setup failed: {0}")]
    Render(String),

    #[error("ui error: {0}")]
    Ui(String),

    #[error("invalid body at slot {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("scene '{scene}' needs {requested} bodies but capacity is {capacity}")]
    CapacityExceeded {
        scene: &'static str,
        requested: usize,
        capacity: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
