//! Simulated bodies
//!
//! A [`Body`] is a sphere with position, velocity, mass and density. Its radius
//! is never set directly: it follows from `volume = mass / density` and the
//! volume of a sphere.

use cgmath::{Vector3, Zero};
use std::f32::consts::PI;

use crate::error::{GravityError, Result};

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::new(0.902, 0.161, 0.216, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.475, 0.945, 1.0);
    pub const SKY_BLUE: Color = Color::new(0.4, 0.749, 1.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 0.894, 0.188, 1.0);
    pub const YELLOW: Color = Color::new(0.992, 0.976, 0.0, 1.0);
    pub const ORANGE: Color = Color::new(1.0, 0.631, 0.0, 1.0);
    pub const PURPLE: Color = Color::new(0.784, 0.478, 1.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const DARK_GRAY: Color = Color::new(0.314, 0.314, 0.314, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Whether a body still takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Active,
    /// Merged into another body, or never loaded. Skipped by every pass.
    Absorbed,
}

/// A sphere moving under the pairwise gravity rule
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub color: Color,
    radius: f32,
    mass: f32,
    density: f32,
    volume: f32,
    state: BodyState,
}

impl Body {
    /// Creates an active body and derives its radius from mass and density
    pub fn new(
        position: Vector3<f32>,
        velocity: Vector3<f32>,
        mass: f32,
        density: f32,
        color: Color,
    ) -> Self {
        let mut body = Self {
            position,
            velocity,
            color,
            radius: 0.0,
            mass,
            density,
            volume: 0.0,
            state: BodyState::Active,
        };
        body.recalculate_radius();
        body
    }

    /// An empty slot: zero mass, zero radius, not active
    pub fn inactive() -> Self {
        Self {
            position: Vector3::zero(),
            velocity: Vector3::zero(),
            color: Color::WHITE,
            radius: 0.0,
            mass: 0.0,
            density: 0.0,
            volume: 0.0,
            state: BodyState::Absorbed,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn state(&self) -> BodyState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == BodyState::Active
    }

    /// Replaces mass and density together and recomputes the radius
    pub fn set_mass_and_density(&mut self, mass: f32, density: f32) {
        self.mass = mass;
        self.density = density;
        self.recalculate_radius();
    }

    /// Takes the body out of the simulation.
    ///
    /// Mass, volume and radius drop to exactly zero so an absorbed body can
    /// never contribute to a later merge or be drawn.
    pub fn deactivate(&mut self) {
        self.mass = 0.0;
        self.volume = 0.0;
        self.radius = 0.0;
        self.velocity = Vector3::zero();
        self.state = BodyState::Absorbed;
    }

    /// Checks that an active body can enter the simulation
    pub fn validate(&self, index: usize) -> Result<()> {
        if !self.is_active() {
            return Ok(());
        }

        let invalid = |reason: &str| GravityError::InvalidBody {
            index,
            reason: reason.to_string(),
        };

        if !is_finite(self.position) {
            return Err(invalid("position is not finite"));
        }
        if !is_finite(self.velocity) {
            return Err(invalid("velocity is not finite"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(invalid("mass must be positive and finite"));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(invalid("density must be positive and finite"));
        }
        Ok(())
    }

    fn recalculate_radius(&mut self) {
        self.volume = self.mass / self.density;
        self.radius = radius_for_volume(self.volume);
    }
}

/// Radius of a sphere with the given volume: `cbrt(volume / (4/3 * PI))`
pub fn radius_for_volume(volume: f32) -> f32 {
    (volume / (4.0 / 3.0 * PI)).cbrt()
}

pub(crate) fn is_finite(v: Vector3<f32>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
