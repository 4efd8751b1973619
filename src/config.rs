//! Application configuration
//!
//! All settings are plain structs with `Default` values matching the classic
//! visualizer. Builder-style `with_*` methods adjust them from code.
//!
//! ```no_run
//! use gravity::config::AppConfig;
//! use gravity::simulation::ScenePreset;
//!
//! let config = AppConfig::default()
//!     .with_target_fps(120)
//!     .with_initial_scene(ScenePreset::Cluster);
//! assert!(config.validate().is_ok());
//! ```

use cgmath::Point3;

use crate::error::{GravityError, Result};
use crate::simulation::{Color, ForceModel, ScenePreset, GRAVITATIONAL_CONSTANT};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Borderless fullscreen on the current monitor
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gravity".to_string(),
            width: 1200,
            height: 700,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub fovy_degrees: f32,
    /// Distance moved per frame while an arrow key is held
    pub pan_speed: f32,
    /// Multiplier of `pan_speed` applied per wheel notch
    pub zoom_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Point3::new(30.0, 30.0, 30.0),
            target: Point3::new(0.0, 0.0, 0.0),
            fovy_degrees: 45.0,
            pan_speed: 0.5,
            zoom_factor: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of body slots
    pub capacity: usize,
    pub velocity_scale: f32,
    /// Change of the velocity scale per frame while comma or period is held
    pub velocity_scale_step: f32,
    pub gravitational_constant: f64,
    pub force_model: ForceModel,
    pub initial_scene: ScenePreset,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            velocity_scale: 0.0001,
            velocity_scale_step: 0.00001,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            force_model: ForceModel::Cancelled,
            initial_scene: ScenePreset::DenseCore,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub background: Color,
    /// Color of the sphere wireframes and HUD text
    pub foreground: Color,
    pub grid_color: Color,
    /// Number of cells along each side of the ground grid
    pub grid_slices: u32,
    pub grid_spacing: f32,
    pub sphere_segments: u32,
    pub wire_rings: u32,
    pub wire_slices: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            grid_color: Color::DARK_GRAY,
            grid_slices: 30,
            grid_spacing: 1.0,
            sphere_segments: 24,
            wire_rings: 16,
            wire_slices: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
    pub target_fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            simulation: SimulationConfig::default(),
            render: RenderConfig::default(),
            target_fps: 60,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.window.fullscreen = fullscreen;
        self
    }

    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.simulation.capacity = capacity;
        self
    }

    pub fn with_velocity_scale(mut self, scale: f32) -> Self {
        self.simulation.velocity_scale = scale;
        self
    }

    pub fn with_force_model(mut self, model: ForceModel) -> Self {
        self.simulation.force_model = model;
        self
    }

    pub fn with_initial_scene(mut self, scene: ScenePreset) -> Self {
        self.simulation.initial_scene = scene;
        self
    }

    pub fn with_pan_speed(mut self, speed: f32) -> Self {
        self.camera.pan_speed = speed;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.render.background = color;
        self
    }

    /// Rejects settings the simulation or renderer cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Err(GravityError::InvalidConfig(message.to_string()));

        if self.simulation.capacity == 0 {
            return invalid("capacity must be at least 1");
        }
        if self.target_fps == 0 {
            return invalid("target fps must be at least 1");
        }
        let scale = self.simulation.velocity_scale;
        if !(0.0..=1.0).contains(&scale) {
            return invalid("velocity scale must be within [0, 1]");
        }
        if !(self.simulation.velocity_scale_step >= 0.0) {
            return invalid("velocity scale step must not be negative");
        }
        if !(self.render.grid_spacing > 0.0) {
            return invalid("grid spacing must be positive");
        }
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::new();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.simulation.capacity, 50);
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 700);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::new()
            .with_title("orbits")
            .with_window_size(800, 600)
            .with_initial_scene(ScenePreset::Collision)
            .with_force_model(ForceModel::Newtonian);

        assert_eq!(config.window.title, "orbits");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.simulation.initial_scene, ScenePreset::Collision);
        assert_eq!(config.simulation.force_model, ForceModel::Newtonian);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            AppConfig::new().with_capacity(0),
            AppConfig::new().with_target_fps(0),
            AppConfig::new().with_velocity_scale(1.5),
            AppConfig::new().with_velocity_scale(-0.1),
            AppConfig::new().with_velocity_scale(f32::NAN),
            AppConfig::new().with_window_size(0, 100),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(GravityError::InvalidConfig(_))
            ));
        }

        let mut config = AppConfig::new();
        config.render.grid_spacing = 0.0;
        assert!(config.validate().is_err());
    }
}
