//! # Primitive Shape Generation
//!
//! All shapes are unit sized and centered at the origin; bodies are scaled
//! and moved per instance in the vertex shader.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a triangle list of a sphere of radius 1.0.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    push_sphere_vertices(&mut data, long_segs, lat_segs);

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate the latitude and longitude lines of a unit sphere
///
/// # Arguments
/// * `rings` - Number of latitude bands between the poles
/// * `slices` - Number of longitude lines
///
/// Returns a line list. Every ring is closed and every slice runs pole to pole.
pub fn generate_sphere_wireframe(rings: u32, slices: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let slices = slices.max(3);
    let rings = rings.max(2);

    push_sphere_vertices(&mut data, slices, rings);

    let row = slices + 1;
    for lat in 0..=rings {
        for long in 0..slices {
            let current = lat * row + long;
            // Rings at the poles collapse into a point
            if lat > 0 && lat < rings {
                data.indices.extend_from_slice(&[current, current + 1]);
            }
            if lat < rings {
                data.indices.extend_from_slice(&[current, current + row]);
            }
        }
    }

    data
}

/// Generate a square line grid on the XZ plane
///
/// # Arguments
/// * `slices` - Number of cells along each side
/// * `spacing` - Size of one cell
///
/// Lines run from `-slices / 2 * spacing` to `slices / 2 * spacing` on both axes.
pub fn generate_grid(slices: u32, spacing: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let half = slices as f32 / 2.0 * spacing;
    for i in 0..=slices {
        let offset = -half + i as f32 * spacing;

        // Parallel to Z
        push_line(&mut data, [offset, 0.0, -half], [offset, 0.0, half]);
        // Parallel to X
        push_line(&mut data, [-half, 0.0, offset], [half, 0.0, offset]);
    }

    data
}

fn push_sphere_vertices(data: &mut GeometryData, long_segs: u32, lat_segs: u32) {
    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let position = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices.push(position);
            data.normals.push(position);
        }
    }
}

fn push_line(data: &mut GeometryData, from: [f32; 3], to: [f32; 3]) {
    let start = data.vertices.len() as u32;
    data.vertices.extend_from_slice(&[from, to]);
    data.normals.extend_from_slice(&[[0.0, 1.0, 0.0]; 2]);
    data.indices.extend_from_slice(&[start, start + 1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_vertices_lie_on_unit_sphere() {
        let sphere = generate_sphere(24, 16);

        assert_eq!(sphere.vertex_count(), 25 * 17);
        assert_eq!(sphere.triangle_count(), 24 * 16 * 2);
        for [x, y, z] in &sphere.vertices {
            assert_relative_eq!((x * x + y * y + z * z).sqrt(), 1.0, epsilon = 1e-5);
        }
        let max_index = *sphere.indices.iter().max().unwrap() as usize;
        assert!(max_index < sphere.vertex_count());
    }

    #[test]
    fn test_sphere_clamps_resolution() {
        let sphere = generate_sphere(0, 0);
        assert_eq!(sphere.vertex_count(), 4 * 3);
    }

    #[test]
    fn test_wireframe_line_count() {
        let rings = 8;
        let slices = 12;
        let wire = generate_sphere_wireframe(rings, slices);

        // Inner rings plus pole-to-pole segments of every slice
        let expected = (rings - 1) * slices + rings * slices;
        assert_eq!(wire.line_count(), expected as usize);
        let max_index = *wire.indices.iter().max().unwrap() as usize;
        assert!(max_index < wire.vertex_count());
    }

    #[test]
    fn test_grid_extent() {
        let grid = generate_grid(30, 1.0);

        assert_eq!(grid.line_count(), 62);
        for [x, y, z] in &grid.vertices {
            assert_eq!(*y, 0.0);
            assert!(x.abs() <= 15.0 && z.abs() <= 15.0);
        }
        assert!(grid.vertices.contains(&[-15.0, 0.0, -15.0]));
        assert!(grid.vertices.contains(&[15.0, 0.0, 15.0]));
    }

    #[test]
    fn test_vertices_interleave_normals() {
        let grid = generate_grid(2, 0.5);
        let vertices = grid.to_vertices();

        assert_eq!(vertices.len(), grid.vertex_count());
        assert_eq!(vertices[0].position, [-0.5, 0.0, -0.5]);
        assert_eq!(vertices[0].normal, [0.0, 1.0, 0.0]);
    }
}
