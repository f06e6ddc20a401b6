//! # Elevation Grid Primitive
//!
//! Generates the mesh for a height field sampled on a regular x/z grid.
//! Each grid cell becomes two triangles; the sample array is validated
//! against the declared dimensions before any vertex is emitted.

use crate::error::MeshError;
use glam::DVec3;
use scene_graph::{ElevationGrid, IndexedFaceSet};

/// Creates a mesh from a height field.
///
/// Vertices are laid out row-major in z, so sample `(x, z)` lands at index
/// `z * x_dimension + x`. The grid's own crease angle carries over to the
/// mesh unchanged.
pub fn create_elevation_grid(grid: &ElevationGrid) -> Result<IndexedFaceSet, MeshError> {
    let x_dim = grid.x_dimension as usize;
    let z_dim = grid.z_dimension as usize;
    if x_dim * z_dim != grid.height.len() {
        return Err(MeshError::GridDimensionMismatch {
            x_dimension: grid.x_dimension,
            z_dimension: grid.z_dimension,
            samples: grid.height.len(),
        });
    }

    let mut mesh = IndexedFaceSet::new();
    for z in 0..z_dim {
        for x in 0..x_dim {
            mesh.add_vertex(DVec3::new(
                x as f64 * grid.x_spacing,
                grid.height[z * x_dim + x],
                z as f64 * grid.z_spacing,
            ));
        }
    }

    for z in 0..z_dim.saturating_sub(1) {
        let current = (z * x_dim) as i32;
        let next = ((z + 1) * x_dim) as i32;
        for x in 0..x_dim.saturating_sub(1) {
            let x = x as i32;
            mesh.add_triangle(x + current, x + next, x + 1 + next);
            mesh.add_triangle(x + current, x + 1 + next, x + 1 + current);
        }
    }

    mesh.crease_angle = grid.crease_angle;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_graph::FACE_END;

    fn grid(x_dim: u32, z_dim: u32, height: Vec<f64>) -> ElevationGrid {
        ElevationGrid {
            x_dimension: x_dim,
            z_dimension: z_dim,
            x_spacing: 1.0,
            z_spacing: 1.0,
            height,
            crease_angle: 0.0,
        }
    }

    #[test]
    fn test_grid_counts() {
        let mesh = create_elevation_grid(&grid(4, 3, vec![0.0; 12])).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        // (4-1) * (3-1) cells, two triangles each
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.is_triangulated());
    }

    #[test]
    fn test_sample_layout_is_z_major() {
        let mut heights = vec![0.0; 6];
        // row z=1, column x=2
        heights[5] = 7.5;
        let mut g = grid(3, 2, heights);
        g.x_spacing = 2.0;
        g.z_spacing = 5.0;
        let mesh = create_elevation_grid(&g).unwrap();
        let coord = mesh.coord.as_ref().unwrap();
        assert_eq!(coord[5], DVec3::new(4.0, 7.5, 5.0));
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let result = create_elevation_grid(&grid(4, 3, vec![0.0; 11]));
        assert_eq!(
            result,
            Err(MeshError::GridDimensionMismatch {
                x_dimension: 4,
                z_dimension: 3,
                samples: 11,
            })
        );
    }

    #[test]
    fn test_degenerate_single_row_has_no_faces() {
        let mesh = create_elevation_grid(&grid(4, 1, vec![0.0; 4])).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_stream_shape() {
        let mesh = create_elevation_grid(&grid(3, 3, vec![1.0; 9])).unwrap();
        assert_eq!(mesh.coord_index.len(), 4 * mesh.triangle_count());
        assert!(mesh.coord_index.iter().skip(3).step_by(4).all(|&i| i == FACE_END));
    }

    #[test]
    fn test_crease_angle_carries_over() {
        let mut g = grid(2, 2, vec![0.0; 4]);
        g.crease_angle = 1.25;
        let mesh = create_elevation_grid(&g).unwrap();
        assert_eq!(mesh.crease_angle, 1.25);
    }
}
