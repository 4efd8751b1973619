//! Gravity
//!
//! A toy real-time N-body gravity visualizer built on wgpu and winit. Bodies
//! attract each other, merge when they touch and are drawn as shaded spheres
//! over a ground grid.
//!
//! The frame logic ([`world::World`]) runs without a window, so the whole
//! simulation can be driven from tests:
//!
//! ```
//! use gravity::{config::AppConfig, input::FrameInput, world::World};
//!
//! let mut world = World::new(&AppConfig::default())?;
//! for _ in 0..10 {
//!     world.update(&FrameInput::default());
//! }
//! assert_eq!(world.stats().frame, 10);
//! # Ok::<(), gravity::error::GravityError>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod simulation;
pub mod timing;
pub mod ui;
pub mod world;

// Re-export main types for convenience
pub use app::GravityApp;
pub use config::AppConfig;
pub use error::{GravityError, Result};
