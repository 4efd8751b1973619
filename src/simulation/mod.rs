//! N-body simulation
//!
//! Bodies, the pairwise gravity step, collision merging, scene presets and
//! the [`SimulationState`] that ties them together. Nothing in here touches
//! the window or the GPU.

pub mod body;
pub mod collision;
pub mod physics;
pub mod scenes;
pub mod state;

pub use body::{Body, BodyState, Color};
pub use physics::{ForceModel, PhysicsParams, StepReport, GRAVITATIONAL_CONSTANT};
pub use scenes::ScenePreset;
pub use state::{SimulationState, SimulationStats};
