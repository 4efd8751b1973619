//! Scene presets
//!
//! Each preset is a fixed initial configuration of bodies. Loading one
//! replaces the whole body array, so switching scenes always starts over.

use cgmath::{InnerSpace, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::PI;

use super::body::{Body, Color};

/// Satellites around the central mass in [`ScenePreset::Cluster`]
pub const CLUSTER_SATELLITES: usize = 48;

/// Seed for the cluster layout, fixed so every load looks the same
const CLUSTER_SEED: u64 = 0x6772_6176;

/// Velocity scale the cluster orbits are tuned for
const CLUSTER_TUNING_SCALE: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenePreset {
    /// Two bodies orbiting a dense central mass
    DenseCore,
    /// One body orbiting a dense central mass
    SingleOrbit,
    /// A swirling cloud of small bodies around a central mass
    Cluster,
    /// Two groups of bodies on a head-on course
    Collision,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 4] = [
        ScenePreset::DenseCore,
        ScenePreset::SingleOrbit,
        ScenePreset::Cluster,
        ScenePreset::Collision,
    ];

    /// Preset bound to number key `number` (1-based)
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn number(self) -> usize {
        match self {
            ScenePreset::DenseCore => 1,
            ScenePreset::SingleOrbit => 2,
            ScenePreset::Cluster => 3,
            ScenePreset::Collision => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenePreset::DenseCore => "dense core",
            ScenePreset::SingleOrbit => "single orbit",
            ScenePreset::Cluster => "cluster",
            ScenePreset::Collision => "collision",
        }
    }

    /// Text shown in the HUD while the scene is active
    pub fn description(self) -> &'static str {
        match self {
            ScenePreset::DenseCore => "Scenario 1 : Two bodies orbiting a dense central mass",
            ScenePreset::SingleOrbit => "Scenario 2 : One body orbiting a dense central mass",
            ScenePreset::Cluster => "Scenario 3 : A cloud of small bodies around a central mass",
            ScenePreset::Collision => "Scenario 4 : Two groups of bodies on a collision course",
        }
    }

    /// Builds the initial bodies of the preset
    pub fn bodies(self) -> Vec<Body> {
        match self {
            ScenePreset::DenseCore => dense_core(),
            ScenePreset::SingleOrbit => single_orbit(),
            ScenePreset::Cluster => cluster(),
            ScenePreset::Collision => collision(),
        }
    }
}

fn dense_core() -> Vec<Body> {
    vec![
        Body::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0e10,
            8f32.powi(10),
            Color::RED,
        ),
        Body::new(
            Vector3::new(17.0, 10.0, 13.0),
            Vector3::new(-0.1, -0.3, -0.2),
            2.2e10,
            1.0e9,
            Color::BLUE,
        ),
        Body::new(
            Vector3::new(7.0, 0.0, 3.0),
            Vector3::new(0.1, 0.3, 0.2),
            3.2e6,
            2.0e5,
            Color::BLUE,
        ),
    ]
}

fn single_orbit() -> Vec<Body> {
    vec![
        Body::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0e10,
            7f32.powi(10),
            Color::RED,
        ),
        Body::new(
            Vector3::new(17.0, 10.0, 13.0),
            Vector3::new(0.0, -0.3, -0.2),
            22000.0,
            1000.0,
            Color::BLUE,
        ),
    ]
}

fn cluster() -> Vec<Body> {
    const PALETTE: [Color; 5] = [
        Color::SKY_BLUE,
        Color::GREEN,
        Color::ORANGE,
        Color::PURPLE,
        Color::BLUE,
    ];

    let mut rng = StdRng::seed_from_u64(CLUSTER_SEED);
    let mut bodies = Vec::with_capacity(CLUSTER_SATELLITES + 1);

    bodies.push(Body::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        5.0e10,
        8f32.powi(10),
        Color::YELLOW,
    ));

    // With the cancelled force rule every body is pulled towards the centroid
    // like a spring with stiffness `n * scale`, so circular speed is `omega * r`.
    let omega = ((CLUSTER_SATELLITES + 1) as f32 * CLUSTER_TUNING_SCALE).sqrt();

    for index in 0..CLUSTER_SATELLITES {
        let azimuth = rng.random_range(0.0..2.0 * PI);
        let height = rng.random_range(-0.6f32..0.6);
        let ring = (1.0 - height * height).sqrt();
        let direction = Vector3::new(ring * azimuth.cos(), height, ring * azimuth.sin());

        let distance = rng.random_range(8.0f32..20.0);
        let tangent = direction.cross(Vector3::unit_y()).normalize();
        let speed = omega * distance * rng.random_range(0.6f32..1.0);

        bodies.push(Body::new(
            direction * distance,
            tangent * speed,
            rng.random_range(1.0e6f32..5.0e6),
            1.0e6,
            PALETTE[index % PALETTE.len()],
        ));
    }

    bodies
}

fn collision() -> Vec<Body> {
    let offsets = [
        Vector3::new(2.0, 2.0, 0.0),
        Vector3::new(-2.0, 0.0, 2.0),
        Vector3::new(0.0, -2.0, -2.0),
    ];

    let mut bodies = Vec::with_capacity(8);
    let groups = [
        (Vector3::new(-12.0f32, 0.0, 0.0), Vector3::new(0.15f32, 0.0, 0.0), Color::ORANGE),
        (Vector3::new(12.0, 1.0, 0.0), Vector3::new(-0.15, 0.0, 0.0), Color::GREEN),
    ];

    for (center, velocity, color) in groups {
        bodies.push(Body::new(center, velocity, 8.0e9, 1.0e9, color));
        for offset in offsets {
            bodies.push(Body::new(center + offset, velocity, 2.0e9, 1.0e9, Color::SKY_BLUE));
        }
    }

    bodies
}
