use approx::assert_relative_eq;
use cgmath::{InnerSpace, Vector3, Zero};

use gravity::config::SimulationConfig;
use gravity::simulation::{Body, ForceModel, ScenePreset, SimulationState};

fn state_with(scene: ScenePreset) -> SimulationState {
    let config = SimulationConfig {
        initial_scene: scene,
        ..SimulationConfig::default()
    };
    SimulationState::new(&config).unwrap()
}

fn centroid(bodies: &[Body]) -> Vector3<f32> {
    let active: Vec<&Body> = bodies.iter().filter(|b| b.is_active()).collect();
    let sum = active
        .iter()
        .fold(Vector3::zero(), |acc, body| acc + body.position);
    sum / active.len() as f32
}

fn total_mass(state: &SimulationState) -> f32 {
    state.active_bodies().map(Body::mass).sum()
}

#[test]
fn heavy_body_stays_near_origin_in_single_orbit() {
    let mut state = state_with(ScenePreset::SingleOrbit);

    for _ in 0..10 {
        state.step();
    }

    let heavy = &state.bodies()[0];
    assert!(heavy.is_active());
    assert!(heavy.position.magnitude() < 0.5);
    assert_eq!(state.active_count(), 2);
}

#[test]
fn cancelled_model_moves_centroid_with_mean_velocity() {
    let mut state = state_with(ScenePreset::SingleOrbit);
    let initial = state.bodies().to_vec();
    let start = centroid(&initial);
    let mean_velocity = (initial[0].velocity + initial[1].velocity) / 2.0;

    let steps = 25;
    for _ in 0..steps {
        state.step();
    }

    let expected = start + mean_velocity * steps as f32;
    let actual = centroid(state.bodies());
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-3);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-3);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-3);
}

#[test]
fn collision_scene_merges_and_conserves_mass() {
    let mut state = state_with(ScenePreset::Collision);
    let loaded = state.active_count();
    let mass_before = total_mass(&state);

    for _ in 0..300 {
        state.step();
        if state.active_count() < loaded {
            break;
        }
    }

    let stats = state.stats();
    assert!(stats.total_merges > 0);
    assert_eq!(state.active_count(), loaded - stats.total_merges);
    assert_relative_eq!(total_mass(&state), mass_before, max_relative = 1e-5);
}

#[test]
fn reload_restores_initial_bodies() {
    let mut state = state_with(ScenePreset::DenseCore);
    for _ in 0..20 {
        state.step();
    }
    assert_ne!(state.bodies()[1], ScenePreset::DenseCore.bodies()[1]);

    state.reload_scene().unwrap();

    let expected = ScenePreset::DenseCore.bodies();
    assert_eq!(&state.bodies()[..expected.len()], expected.as_slice());
    assert!(state.bodies()[expected.len()..]
        .iter()
        .all(|body| !body.is_active()));
    assert_eq!(state.stats().frame, 0);
}

#[test]
fn every_preset_loads_within_default_capacity() {
    let mut state = state_with(ScenePreset::DenseCore);

    for preset in ScenePreset::ALL {
        state.load_scene(preset).unwrap();
        assert_eq!(state.scene(), preset);
        assert_eq!(state.active_count(), preset.bodies().len());
        assert_eq!(state.bodies().len(), state.capacity());
    }
}

#[test]
fn zero_velocity_scale_keeps_velocities() {
    let mut state = state_with(ScenePreset::SingleOrbit);
    state.set_velocity_scale(0.0);
    let before = state.bodies().to_vec();

    state.step();

    for (old, new) in before.iter().zip(state.bodies()) {
        if old.is_active() {
            assert_eq!(old.velocity, new.velocity);
            assert_relative_eq!(new.position.x, old.position.x + old.velocity.x);
            assert_relative_eq!(new.position.y, old.position.y + old.velocity.y);
            assert_relative_eq!(new.position.z, old.position.z + old.velocity.z);
        }
    }
}

#[test]
fn newtonian_model_reports_force_and_stays_finite() {
    let mut state = state_with(ScenePreset::DenseCore);
    assert_eq!(state.toggle_force_model(), ForceModel::Newtonian);

    let first = state.step();
    assert_eq!(first.last_step.pairs, 6);
    assert!(first.last_step.max_force > 0.0);

    for _ in 0..50 {
        state.step();
    }

    for body in state.active_bodies() {
        assert!(body.position.x.is_finite());
        assert!(body.velocity.magnitude().is_finite());
    }
}
