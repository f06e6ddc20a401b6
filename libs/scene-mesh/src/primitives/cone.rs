//! # Cone Primitive
//!
//! Generates the mesh for a cone: a rim of `divisions` vertices at the
//! base, the apex on the +y axis, and a fan-closed bottom disc.

use crate::error::MeshError;
use glam::DVec3;
use scene_graph::IndexedFaceSet;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Creates a cone mesh.
///
/// # Arguments
///
/// * `bottom_radius` - Radius of the base disc.
/// * `height` - Height from the base to the apex at `(0, height, 0)`.
/// * `divisions` - Number of rim segments.
///
/// The crease angle is fixed to 90 degrees so the lateral surface smooths
/// while the base rim stays a hard edge.
pub fn create_cone(
    bottom_radius: f64,
    height: f64,
    divisions: u32,
) -> Result<IndexedFaceSet, MeshError> {
    if height < 0.0 || bottom_radius < 0.0 {
        return Err(MeshError::InvalidParameter { primitive: "Cone" });
    }

    let n = divisions as i32;
    let mut mesh = IndexedFaceSet::new();

    for i in 0..n {
        let angle = i as f64 * TAU / n as f64;
        mesh.add_vertex(DVec3::new(
            bottom_radius * angle.cos(),
            0.0,
            bottom_radius * angle.sin(),
        ));
    }
    let apex = mesh.add_vertex(DVec3::new(0.0, height, 0.0));
    let bottom_center = mesh.add_vertex(DVec3::ZERO);

    for i in 0..n {
        let next = (i + 1) % n;
        // side face
        mesh.add_triangle(apex, next, i);
        // bottom face
        mesh.add_triangle(bottom_center, i, next);
    }

    mesh.crease_angle = FRAC_PI_2;
    Ok(mesh)
}
