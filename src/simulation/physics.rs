//! Pairwise gravity step
//!
//! Every ordered pair of active bodies contributes a velocity change to the
//! first body, then all active bodies advance with forward Euler
//! (`position += velocity`).
//!
//! The default [`ForceModel::Cancelled`] keeps the visualizer's historical
//! behaviour: the force magnitude `G * m_i * m_j / d^2` multiplies and divides
//! the positional delta, so the applied change is just
//! `-(p_i - p_j) * velocity_scale`. The magnitude is still computed and
//! reported so it can be displayed.

use cgmath::{InnerSpace, Vector3, Zero};
use log::warn;

use super::body::{is_finite, Body};

/// Gravitational constant used by the visualizer (not the SI value)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-12;

/// How a pair of bodies changes velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceModel {
    /// `v_i -= (p_i - p_j) * scale`, mass independent
    #[default]
    Cancelled,
    /// `v_i -= G * m_i * m_j * (p_i - p_j) / d^3 * scale`
    Newtonian,
}

impl ForceModel {
    pub fn toggled(self) -> Self {
        match self {
            ForceModel::Cancelled => ForceModel::Newtonian,
            ForceModel::Newtonian => ForceModel::Cancelled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForceModel::Cancelled => "cancelled (delta * scale)",
            ForceModel::Newtonian => "newtonian (inverse square)",
        }
    }
}

/// Parameters for one physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub gravitational_constant: f64,
    pub velocity_scale: f32,
    pub force_model: ForceModel,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            velocity_scale: 0.0001,
            force_model: ForceModel::Cancelled,
        }
    }
}

/// What happened during a physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Ordered pairs that exchanged a velocity change
    pub pairs: usize,
    /// Ordered pairs skipped because the bodies coincide
    pub skipped_pairs: usize,
    /// Largest pairwise force magnitude `G * m_i * m_j / d^2`
    pub max_force: f64,
    /// Bodies deactivated because their state stopped being finite
    pub invalidated: usize,
}

/// Advances all active bodies by one step.
///
/// Velocity changes are computed from the positions at the start of the step,
/// so the outcome does not depend on body order.
pub fn step(bodies: &mut [Body], params: &PhysicsParams) -> StepReport {
    let mut report = StepReport::default();

    let snapshot: Vec<Option<(Vector3<f32>, f32)>> = bodies
        .iter()
        .map(|body| body.is_active().then(|| (body.position, body.mass())))
        .collect();

    for (i, body) in bodies.iter_mut().enumerate() {
        let Some((position_i, mass_i)) = snapshot[i] else {
            continue;
        };

        let mut velocity_change = Vector3::zero();
        for (j, other) in snapshot.iter().enumerate() {
            let Some((position_j, mass_j)) = *other else {
                continue;
            };
            if i == j {
                continue;
            }

            let delta = position_i - position_j;
            let distance = delta.magnitude();
            if !(distance > 0.0 && distance.is_finite()) {
                report.skipped_pairs += 1;
                continue;
            }

            let force = params.gravitational_constant * f64::from(mass_i) * f64::from(mass_j)
                / f64::from(distance).powi(2);
            report.max_force = report.max_force.max(force);
            report.pairs += 1;

            velocity_change -= match params.force_model {
                ForceModel::Cancelled => delta * params.velocity_scale,
                ForceModel::Newtonian => {
                    delta * ((force / f64::from(distance)) as f32 * params.velocity_scale)
                }
            };
        }

        body.velocity += velocity_change;
    }

    for (index, body) in bodies.iter_mut().enumerate() {
        if !body.is_active() {
            continue;
        }

        body.position += body.velocity;

        if !is_finite(body.position) || !is_finite(body.velocity) {
            warn!("body {index} left the simulation: non-finite position or velocity");
            body.deactivate();
            report.invalidated += 1;
        }
    }

    report
}
