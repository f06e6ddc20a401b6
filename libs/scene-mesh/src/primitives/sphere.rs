//! # Sphere Primitive
//!
//! Generates the mesh for a sphere using latitude/longitude tessellation:
//! `divisions - 1` latitude rings of `divisions` vertices each, closed by
//! pole fans. The crease angle is fixed to a full half-turn so normal
//! generation always smooths the whole surface.

use crate::error::MeshError;
use glam::DVec3;
use scene_graph::IndexedFaceSet;
use std::f64::consts::{PI, TAU};

/// Creates a sphere mesh.
///
/// # Arguments
///
/// * `radius` - Sphere radius.
/// * `divisions` - Angular division count, used both latitudinally and
///   longitudinally.
///
/// # Example
///
/// ```rust
/// use scene_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 20).unwrap();
/// assert_eq!(mesh.vertex_count(), 19 * 20 + 2);
/// ```
pub fn create_sphere(radius: f64, divisions: u32) -> Result<IndexedFaceSet, MeshError> {
    if radius < 0.0 {
        return Err(MeshError::InvalidParameter { primitive: "Sphere" });
    }

    let n = divisions as i32;
    let mut mesh = IndexedFaceSet::new();

    // Rings from just below the north pole to just above the south pole;
    // ring i sits at polar angle i * PI / n.
    for i in 1..n {
        let polar = i as f64 * PI / n as f64;
        for j in 0..n {
            let azimuth = j as f64 * TAU / n as f64;
            mesh.add_vertex(DVec3::new(
                radius * polar.sin() * azimuth.cos(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.sin(),
            ));
        }
    }
    let top = mesh.add_vertex(DVec3::new(0.0, radius, 0.0));
    let bottom = mesh.add_vertex(DVec3::new(0.0, -radius, 0.0));

    // top fan
    for i in 0..n {
        mesh.add_triangle(top, (i + 1) % n, i);
    }

    // bands between adjacent rings
    for i in 0..n - 2 {
        let upper = i * n;
        let lower = (i + 1) * n;
        for j in 0..n {
            let next = (j + 1) % n;
            // upward convex triangle
            mesh.add_triangle(j + upper, next + lower, j + lower);
            // downward convex triangle
            mesh.add_triangle(j + upper, next + upper, next + lower);
        }
    }

    // bottom fan
    let offset = (n - 2) * n;
    for i in 0..n {
        mesh.add_triangle(bottom, i + offset, (i + 1) % n + offset);
    }

    mesh.crease_angle = PI;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scene_graph::FACE_END;

    #[test]
    fn test_sphere_counts() {
        let n = 20usize;
        let mesh = create_sphere(5.0, n as u32).unwrap();
        assert_eq!(mesh.vertex_count(), (n - 1) * n + 2);
        assert_eq!(mesh.triangle_count(), 2 * n * (n - 1));
        assert!(mesh.is_triangulated());
    }

    #[test]
    fn test_all_vertices_on_sphere_surface() {
        let radius = 3.0;
        let mesh = create_sphere(radius, 12).unwrap();
        for v in mesh.coord.as_ref().unwrap() {
            assert_relative_eq!(v.length(), radius, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn test_stream_shape() {
        let mesh = create_sphere(1.0, 8).unwrap();
        assert_eq!(mesh.coord_index.len(), 4 * mesh.triangle_count());
        assert!(mesh.coord_index.iter().skip(3).step_by(4).all(|&i| i == FACE_END));
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        assert_eq!(
            create_sphere(-1.0, 8),
            Err(MeshError::InvalidParameter { primitive: "Sphere" })
        );
    }

    #[test]
    fn test_sphere_is_fully_smoothed() {
        let mesh = create_sphere(1.0, 8).unwrap();
        assert_relative_eq!(mesh.crease_angle, PI);
    }

    #[test]
    fn test_minimum_division_count() {
        let mesh = create_sphere(1.0, 3).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 3 + 2);
        assert!(mesh.is_triangulated());
    }
}
