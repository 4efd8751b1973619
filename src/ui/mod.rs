//! # User Interface Module
//!
//! Dear ImGui overlay for the visualizer.
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`hud`] - the status window showing frame rate, scene and simulation state
//!
//! The UI sees window input before the simulation does. Keyboard events are
//! still forwarded to the simulation so held keys never get stuck.

pub mod hud;
pub mod manager;

pub use hud::{draw_hud, HudStats};
pub use manager::UiManager;
