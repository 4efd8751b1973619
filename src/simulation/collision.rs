//! Collision detection and merging
//!
//! Two active bodies collide when their bounding spheres touch or overlap.
//! The later body in the array is absorbed into the earlier one: mass adds up,
//! density becomes the mass-weighted average and velocities are summed.

use cgmath::InnerSpace;
use log::debug;

use super::body::Body;

/// Merges every overlapping pair of active bodies and returns the number of merges.
///
/// Each ordered pair is visited. Once a body has been absorbed it is inactive,
/// so the mirrored visit of the same pair does nothing.
pub fn resolve_collisions(bodies: &mut [Body]) -> usize {
    let mut merges = 0;

    for i in 0..bodies.len() {
        for j in 0..bodies.len() {
            if i == j || !bodies[i].is_active() || !bodies[j].is_active() {
                continue;
            }

            if overlapping(&bodies[i], &bodies[j]) {
                let (survivor, absorbed) = pair_mut(bodies, i, j);
                merge(survivor, absorbed);
                debug!("body {j} merged into body {i}");
                merges += 1;
            }
        }
    }

    merges
}

/// True when the bounding spheres of the two bodies intersect
pub fn overlapping(a: &Body, b: &Body) -> bool {
    let distance = (a.position - b.position).magnitude();
    distance <= a.radius() + b.radius()
}

/// Absorbs `absorbed` into `survivor`
pub fn merge(survivor: &mut Body, absorbed: &mut Body) {
    let total_mass = survivor.mass() + absorbed.mass();
    let density = (survivor.density() * survivor.mass() + absorbed.density() * absorbed.mass())
        / total_mass;

    survivor.set_mass_and_density(total_mass, density);
    survivor.velocity += absorbed.velocity;
    absorbed.deactivate();
}

fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::body::{radius_for_volume, Color};
    use approx::assert_relative_eq;
    use cgmath::Vector3;

    fn body(position: [f32; 3], velocity: [f32; 3], mass: f32, density: f32) -> Body {
        Body::new(position.into(), velocity.into(), mass, density, Color::RED)
    }

    #[test]
    fn test_merge_combines_mass_density_and_velocity() {
        let mut bodies = vec![
            body([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 3.0, 2.0),
            body([0.5, 0.0, 0.0], [0.0, 2.0, 0.0], 1.0, 6.0),
        ];

        let merges = resolve_collisions(&mut bodies);

        assert_eq!(merges, 1);
        let merged = &bodies[0];
        assert_relative_eq!(merged.mass(), 4.0);
        assert_relative_eq!(merged.density(), (2.0 * 3.0 + 6.0 * 1.0) / 4.0);
        assert_eq!(merged.velocity, Vector3::new(1.0, 2.0, 0.0));
        assert_relative_eq!(merged.radius(), radius_for_volume(4.0 / 3.0));
        assert_eq!(merged.position, Vector3::new(0.0, 0.0, 0.0));

        assert!(!bodies[1].is_active());
        assert_eq!(bodies[1].mass(), 0.0);
    }

    #[test]
    fn test_merge_is_idempotent_within_a_frame() {
        let mut bodies = vec![
            body([0.0, 0.0, 0.0], [0.1, 0.0, 0.0], 5.0, 1.0),
            body([0.2, 0.0, 0.0], [0.0, 0.3, 0.0], 2.0, 4.0),
        ];

        assert_eq!(resolve_collisions(&mut bodies), 1);
        let after_first = bodies.clone();

        assert_eq!(resolve_collisions(&mut bodies), 0);
        assert_eq!(bodies, after_first);
    }

    #[test]
    fn test_overlap_threshold_is_sum_of_radii() {
        let a = body([0.0, 0.0, 0.0], [0.0; 3], 1.0, 1.0);
        let gap = a.radius() * 2.0;
        let b = body([gap * 0.99, 0.0, 0.0], [0.0; 3], 1.0, 1.0);
        let c = body([gap * 1.01, 0.0, 0.0], [0.0; 3], 1.0, 1.0);

        assert!(overlapping(&a, &b));
        assert!(!overlapping(&a, &c));
    }

    #[test]
    fn test_separated_bodies_are_untouched() {
        let mut bodies = vec![
            body([0.0, 0.0, 0.0], [0.0; 3], 1.0, 1.0),
            body([10.0, 0.0, 0.0], [0.0; 3], 1.0, 1.0),
        ];
        let before = bodies.clone();

        assert_eq!(resolve_collisions(&mut bodies), 0);
        assert_eq!(bodies, before);
    }

    #[test]
    fn test_inactive_bodies_never_merge() {
        let mut bodies = vec![
            body([0.0, 0.0, 0.0], [0.0; 3], 1.0, 1.0),
            Body::inactive(),
        ];

        assert_eq!(resolve_collisions(&mut bodies), 0);
        assert_relative_eq!(bodies[0].mass(), 1.0);
    }

    #[test]
    fn test_chain_of_overlaps_merges_into_first() {
        let mut bodies = vec![
            body([0.0, 0.0, 0.0], [0.0; 3], 1.0, 1.0),
            body([0.1, 0.0, 0.0], [0.0; 3], 1.0, 1.0),
            body([0.2, 0.0, 0.0], [0.0; 3], 1.0, 1.0),
        ];

        assert_eq!(resolve_collisions(&mut bodies), 2);
        assert_relative_eq!(bodies[0].mass(), 3.0);
        assert_eq!(bodies.iter().filter(|b| b.is_active()).count(), 1);
    }
}
