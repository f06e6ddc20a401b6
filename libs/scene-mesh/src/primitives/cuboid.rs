//! # Box Primitive
//!
//! Generates the mesh for an axis-aligned box from a fixed corner/triangle
//! table. No tessellation parameter applies; the crease angle stays zero so
//! normal generation produces flat shading.

use crate::error::MeshError;
use glam::DVec3;
use scene_graph::IndexedFaceSet;

/// Signs selecting the 8 corners at the box's half extents.
const CORNER_SIGNS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
];

/// The 12 box triangles with outward winding.
const TRIANGLES: [[i32; 3]; 12] = [
    [5, 7, 3],
    [5, 3, 1],
    [0, 2, 6],
    [0, 6, 4],
    [4, 6, 7],
    [4, 7, 5],
    [1, 3, 2],
    [1, 2, 0],
    [7, 6, 2],
    [7, 2, 3],
    [4, 5, 1],
    [4, 1, 0],
];

/// Creates a box mesh from its full extents.
///
/// # Arguments
///
/// * `size` - Full edge lengths along x, y and z.
///
/// # Example
///
/// ```rust
/// use scene_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::splat(2.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3) -> Result<IndexedFaceSet, MeshError> {
    let half = size / 2.0;
    if half.x < 0.0 || half.y < 0.0 || half.z < 0.0 {
        return Err(MeshError::InvalidParameter { primitive: "Box" });
    }

    let mut mesh = IndexedFaceSet::new();
    for [sx, sy, sz] in CORNER_SIGNS {
        mesh.add_vertex(DVec3::new(sx * half.x, sy * half.y, sz * half.z));
    }
    for [v0, v1, v2] in TRIANGLES {
        mesh.add_triangle(v0, v1, v2);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_graph::FACE_END;

    #[test]
    fn test_unit_half_extent_box() {
        let mesh = create_box(DVec3::splat(2.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        for v in mesh.coord.as_ref().unwrap() {
            for c in [v.x, v.y, v.z] {
                assert!(c == 1.0 || c == -1.0);
            }
        }
    }

    #[test]
    fn test_stream_shape() {
        let mesh = create_box(DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(mesh.coord_index.len(), 4 * mesh.triangle_count());
        assert!(mesh.coord_index.iter().skip(3).step_by(4).all(|&i| i == FACE_END));
        assert!(mesh.is_triangulated());
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let result = create_box(DVec3::new(-1.0, 1.0, 1.0));
        assert_eq!(result, Err(MeshError::InvalidParameter { primitive: "Box" }));
    }

    #[test]
    fn test_box_stays_flat_shaded() {
        let mesh = create_box(DVec3::splat(2.0)).unwrap();
        assert_eq!(mesh.crease_angle, 0.0);
    }
}
