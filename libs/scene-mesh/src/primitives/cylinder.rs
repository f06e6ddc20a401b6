//! # Cylinder Primitive
//!
//! Generates the mesh for a cylinder: two rims of `divisions` vertices at
//! y = ±height/2, fan-closed caps, and lateral quads split into a fixed
//! upward/downward triangle pair per segment.

use crate::error::MeshError;
use glam::DVec3;
use scene_graph::IndexedFaceSet;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Creates a cylinder mesh.
///
/// # Arguments
///
/// * `radius` - Radius of both rims.
/// * `height` - Full height along y, centered at the origin.
/// * `divisions` - Number of rim segments.
///
/// The lateral quads are split consistently (not by shortest diagonal) so
/// neighboring segments triangulate the same way. The crease angle is fixed
/// to 90 degrees.
pub fn create_cylinder(
    radius: f64,
    height: f64,
    divisions: u32,
) -> Result<IndexedFaceSet, MeshError> {
    if height < 0.0 || radius < 0.0 {
        return Err(MeshError::InvalidParameter {
            primitive: "Cylinder",
        });
    }

    let n = divisions as i32;
    let y = height / 2.0;
    let mut mesh = IndexedFaceSet::new();

    // Top rim occupies [0, n), bottom rim [n, 2n).
    for i in 0..n {
        let angle = i as f64 * TAU / n as f64;
        mesh.add_vertex(DVec3::new(radius * angle.cos(), y, radius * angle.sin()));
    }
    for i in 0..n {
        let angle = i as f64 * TAU / n as f64;
        mesh.add_vertex(DVec3::new(radius * angle.cos(), -y, radius * angle.sin()));
    }
    let top_center = mesh.add_vertex(DVec3::new(0.0, y, 0.0));
    let bottom_center = mesh.add_vertex(DVec3::new(0.0, -y, 0.0));

    for i in 0..n {
        let next = (i + 1) % n;
        // top face
        mesh.add_triangle(top_center, next, i);
        // side face (upward convex triangle)
        mesh.add_triangle(i, next + n, i + n);
        // side face (downward convex triangle)
        mesh.add_triangle(i, next, next + n);
        // bottom face
        mesh.add_triangle(bottom_center, i + n, next + n);
    }

    mesh.crease_angle = FRAC_PI_2;
    Ok(mesh)
}
