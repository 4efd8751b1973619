//! Per-frame update
//!
//! [`World`] owns the simulation and the camera. [`World::update`] is the whole
//! frame logic minus rendering, so it runs the same with or without a window.

use log::{info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::gfx::camera::{CameraController, PanCamera};
use crate::input::{Action, FrameInput};
use crate::simulation::{SimulationState, SimulationStats};

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct World {
    pub simulation: SimulationState,
    pub camera: PanCamera,
    pub controller: CameraController,
}

impl World {
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let aspect = config.window.width as f32 / config.window.height as f32;
        Ok(Self {
            simulation: SimulationState::new(&config.simulation)?,
            camera: PanCamera::new(&config.camera, aspect),
            controller: CameraController::from_config(&config.camera),
        })
    }

    /// Applies one frame of input, then advances the simulation by one step
    pub fn update(&mut self, input: &FrameInput) -> FrameOutcome {
        self.controller.update_camera(input, &mut self.camera);

        for action in &input.triggered {
            match action {
                Action::SelectScene(preset) => {
                    if let Err(error) = self.simulation.load_scene(*preset) {
                        warn!("Could not load scene {}: {error}", preset.name());
                    }
                }
                Action::ReloadScene => {
                    if let Err(error) = self.simulation.reload_scene() {
                        warn!("Could not reload scene: {error}");
                    }
                }
                Action::TogglePause => {
                    self.simulation.toggle_paused();
                }
                Action::ToggleForceModel => {
                    self.simulation.toggle_force_model();
                }
                Action::Quit => {
                    info!("Quit requested");
                    return FrameOutcome::Quit;
                }
                _ => {}
            }
        }

        if input.is_held(Action::SlowDown) {
            self.simulation.adjust_velocity_scale(-1);
        }
        if input.is_held(Action::SpeedUp) {
            self.simulation.adjust_velocity_scale(1);
        }

        self.simulation.step();
        FrameOutcome::Continue
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
    }

    pub fn stats(&self) -> SimulationStats {
        self.simulation.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScenePreset;

    fn world() -> World {
        World::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_input_steps_simulation() {
        let mut world = world();
        let camera = world.camera;

        assert_eq!(world.update(&FrameInput::default()), FrameOutcome::Continue);

        assert_eq!(world.stats().frame, 1);
        assert_eq!(world.camera, camera);
    }

    #[test]
    fn test_scene_key_resets_bodies() {
        let mut world = world();
        for _ in 0..5 {
            world.update(&FrameInput::default());
        }

        let input =
            FrameInput::default().with_triggered(Action::SelectScene(ScenePreset::SingleOrbit));
        world.update(&input);

        assert_eq!(world.simulation.scene(), ScenePreset::SingleOrbit);
        assert_eq!(world.simulation.active_count(), 2);
        // The scene is loaded before the step of the same frame
        assert_eq!(world.stats().frame, 1);
    }

    #[test]
    fn test_quit_stops_before_stepping() {
        let mut world = world();
        let input = FrameInput::default().with_triggered(Action::Quit);

        assert_eq!(world.update(&input), FrameOutcome::Quit);
        assert_eq!(world.stats().frame, 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AppConfig::default().with_capacity(0);
        assert!(World::new(&config).is_err());
    }
}
