//! Simulation state
//!
//! [`SimulationState`] owns the fixed-capacity body array and every runtime
//! knob of the simulation: the active scene, the velocity scale, the force
//! model and the paused flag.

use log::{debug, info};

use super::body::Body;
use super::collision::resolve_collisions;
use super::physics::{self, ForceModel, PhysicsParams, StepReport};
use super::scenes::ScenePreset;
use crate::config::SimulationConfig;
use crate::error::{GravityError, Result};

/// Totals of the most recent step, kept for the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationStats {
    pub frame: u64,
    pub last_step: StepReport,
    pub last_merges: usize,
    pub total_merges: usize,
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    bodies: Vec<Body>,
    scene: ScenePreset,
    params: PhysicsParams,
    velocity_scale_step: f32,
    paused: bool,
    stats: SimulationStats,
}

impl SimulationState {
    /// Creates the body array and loads the configured initial scene
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let mut state = Self {
            bodies: vec![Body::inactive(); config.capacity],
            scene: config.initial_scene,
            params: PhysicsParams {
                gravitational_constant: config.gravitational_constant,
                velocity_scale: config.velocity_scale.clamp(0.0, 1.0),
                force_model: config.force_model,
            },
            velocity_scale_step: config.velocity_scale_step,
            paused: false,
            stats: SimulationStats::default(),
        };
        state.load_scene(config.initial_scene)?;
        Ok(state)
    }

    /// Replaces every slot with the bodies of `preset`.
    ///
    /// On error the previous bodies are kept.
    pub fn load_scene(&mut self, preset: ScenePreset) -> Result<()> {
        self.load_bodies(preset, preset.bodies())
    }

    /// Reloads the current scene from its initial configuration
    pub fn reload_scene(&mut self) -> Result<()> {
        self.load_scene(self.scene)
    }

    /// Replaces every slot with `bodies`, filling the remainder with inactive slots.
    ///
    /// `scene` is only recorded so the HUD and [`Self::reload_scene`] know
    /// what is running.
    pub fn load_bodies(&mut self, scene: ScenePreset, bodies: Vec<Body>) -> Result<()> {
        let capacity = self.capacity();
        if bodies.len() > capacity {
            return Err(GravityError::CapacityExceeded {
                scene: scene.name(),
                requested: bodies.len(),
                capacity,
            });
        }
        for (index, body) in bodies.iter().enumerate() {
            body.validate(index)?;
        }

        let loaded = bodies.len();
        self.bodies = bodies;
        self.bodies.resize(capacity, Body::inactive());
        self.scene = scene;
        self.stats = SimulationStats::default();

        info!("Loaded {} ({loaded} bodies)", scene.description());
        Ok(())
    }

    /// Runs one physics step followed by one collision pass.
    ///
    /// Does nothing while paused.
    pub fn step(&mut self) -> SimulationStats {
        if self.paused {
            return self.stats;
        }

        let report = physics::step(&mut self.bodies, &self.params);
        let merges = resolve_collisions(&mut self.bodies);
        if merges > 0 {
            debug!("{merges} merge(s) in frame {}", self.stats.frame);
        }

        self.stats.frame += 1;
        self.stats.last_step = report;
        self.stats.last_merges = merges;
        self.stats.total_merges += merges;
        self.stats
    }

    /// Moves the velocity scale by `steps` increments, clamped to `[0, 1]`
    pub fn adjust_velocity_scale(&mut self, steps: i32) {
        let scale = self.params.velocity_scale + steps as f32 * self.velocity_scale_step;
        self.params.velocity_scale = scale.clamp(0.0, 1.0);
    }

    pub fn set_velocity_scale(&mut self, scale: f32) {
        self.params.velocity_scale = scale.clamp(0.0, 1.0);
    }

    pub fn toggle_force_model(&mut self) -> ForceModel {
        self.params.force_model = self.params.force_model.toggled();
        info!("Force model: {}", self.params.force_model.label());
        self.params.force_model
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn active_bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|body| body.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active_bodies().count()
    }

    pub fn capacity(&self) -> usize {
        self.bodies.len()
    }

    pub fn scene(&self) -> ScenePreset {
        self.scene
    }

    pub fn velocity_scale(&self) -> f32 {
        self.params.velocity_scale
    }

    pub fn force_model(&self) -> ForceModel {
        self.params.force_model
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::body::Color;
    use cgmath::Vector3;

    fn state() -> SimulationState {
        SimulationState::new(&SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_scene_is_loaded() {
        let state = state();
        assert_eq!(state.scene(), ScenePreset::DenseCore);
        assert_eq!(state.capacity(), 50);
        assert_eq!(state.active_count(), 3);
        assert!(state.bodies()[3..].iter().all(|b| b.mass() == 0.0));
    }

    #[test]
    fn test_capacity_exceeded_keeps_previous_state() {
        let config = SimulationConfig {
            capacity: 3,
            ..Default::default()
        };
        let mut state = SimulationState::new(&config).unwrap();
        let before = state.bodies().to_vec();

        let result = state.load_scene(ScenePreset::Cluster);

        assert!(matches!(
            result,
            Err(GravityError::CapacityExceeded { capacity: 3, .. })
        ));
        assert_eq!(state.bodies(), before.as_slice());
        assert_eq!(state.scene(), ScenePreset::DenseCore);
    }

    #[test]
    fn test_invalid_body_is_rejected() {
        let mut state = state();
        let bad = Body::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            -1.0,
            1.0,
            Color::RED,
        );

        let result = state.load_bodies(ScenePreset::SingleOrbit, vec![bad]);

        assert!(matches!(result, Err(GravityError::InvalidBody { index: 0, .. })));
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn test_velocity_scale_is_clamped() {
        let mut state = state();
        state.adjust_velocity_scale(-1000);
        assert_eq!(state.velocity_scale(), 0.0);

        state.set_velocity_scale(3.0);
        assert_eq!(state.velocity_scale(), 1.0);
        state.adjust_velocity_scale(5);
        assert_eq!(state.velocity_scale(), 1.0);
    }

    #[test]
    fn test_paused_state_does_not_move() {
        let mut state = state();
        state.toggle_paused();
        let before = state.bodies().to_vec();

        state.step();

        assert_eq!(state.bodies(), before.as_slice());
        assert_eq!(state.stats().frame, 0);
    }

    #[test]
    fn test_step_counts_frames_and_merges() {
        let mut state = state();
        let touching = vec![
            Body::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 8.0, 1.0, Color::RED),
            Body::new(Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 8.0, 1.0, Color::RED),
        ];
        state.load_bodies(ScenePreset::Collision, touching).unwrap();

        let stats = state.step();

        assert_eq!(stats.frame, 1);
        assert_eq!(stats.last_merges, 1);
        assert_eq!(stats.total_merges, 1);
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_toggle_force_model() {
        let mut state = state();
        assert_eq!(state.toggle_force_model(), ForceModel::Newtonian);
        assert_eq!(state.force_model(), ForceModel::Newtonian);
        assert_eq!(state.toggle_force_model(), ForceModel::Cancelled);
    }
}
