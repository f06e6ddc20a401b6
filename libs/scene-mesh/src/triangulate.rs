//! # Polygon Triangulation
//!
//! Splits a flat, sentinel-terminated polygon index stream into triangles.
//! Only triangles and quads are accepted; quads are split along their
//! shorter diagonal to minimize sliver triangles. Alongside the new index
//! stream the triangulator emits the remap tables the attribute remapper
//! needs to rebuild color and normal indices.

use crate::error::MeshError;
use glam::DVec3;
use scene_graph::FACE_END;

/// Parallel outputs of one triangulation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    /// New triangulated index stream (3 indices + sentinel per face).
    pub coord_index: Vec<i32>,
    /// New flattened stream position → original flattened stream position;
    /// sentinel positions map to −1.
    pub index_position_map: Vec<i32>,
    /// New triangle ordinal → original face ordinal.
    pub face_index_map: Vec<i32>,
}

impl Triangulation {
    /// Number of triangles emitted.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.face_index_map.len()
    }
}

/// Triangulates a sentinel-terminated index stream against its vertex array.
///
/// Any coordinate index reaching or exceeding the vertex count aborts the
/// pass immediately; a face with fewer than three or more than four vertices
/// aborts with the matching arity error. A trailing index run without a
/// closing sentinel is dropped.
pub fn triangulate(vertices: &[DVec3], coord_index: &[i32]) -> Result<Triangulation, MeshError> {
    let vertex_count = vertices.len();
    let mut out = Triangulation::default();

    let mut polygon: Vec<i32> = Vec::new();
    let mut corners: Vec<usize> = Vec::new();
    // Stream position of the current face's first index.
    let mut face_top = 0usize;
    let mut org_face = 0i32;

    for (position, &index) in coord_index.iter().enumerate() {
        if index >= vertex_count as i32 {
            return Err(MeshError::CoordIndexOutOfRange {
                index,
                vertex_count,
            });
        }

        if index >= 0 {
            polygon.push(index);
            continue;
        }

        corners.clear();
        let triangles = split_polygon(&polygon, vertices, &mut corners)?;
        for triangle in 0..triangles {
            for k in 0..3 {
                let corner = corners[triangle * 3 + k];
                out.coord_index.push(polygon[corner]);
                out.index_position_map.push((face_top + corner) as i32);
            }
            out.coord_index.push(FACE_END);
            out.index_position_map.push(-1);
            out.face_index_map.push(org_face);
        }

        face_top = position + 1;
        org_face += 1;
        polygon.clear();
    }

    Ok(out)
}

/// Splits one polygon into triangles, writing corner positions (indices into
/// the polygon buffer) into `out`, and returns the triangle count.
fn split_polygon(
    polygon: &[i32],
    vertices: &[DVec3],
    out: &mut Vec<usize>,
) -> Result<usize, MeshError> {
    match polygon.len() {
        0..=2 => Err(MeshError::FaceTooSmall),
        3 => {
            out.extend_from_slice(&[0, 1, 2]);
            Ok(1)
        }
        4 => {
            let v0 = vertices[polygon[0] as usize];
            let v1 = vertices[polygon[1] as usize];
            let v2 = vertices[polygon[2] as usize];
            let v3 = vertices[polygon[3] as usize];

            // Split along the shorter diagonal.
            if v0.distance_squared(v2) < v1.distance_squared(v3) {
                out.extend_from_slice(&[0, 1, 2, 0, 2, 3]);
            } else {
                out.extend_from_slice(&[0, 1, 3, 1, 2, 3]);
            }
            Ok(2)
        }
        n => Err(MeshError::UnsupportedFace(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_area(a: DVec3, b: DVec3, c: DVec3) -> f64 {
        (b - a).cross(c - a).length() / 2.0
    }

    #[test]
    fn test_triangle_passes_through() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let out = triangulate(&vertices, &[0, 1, 2, FACE_END]).unwrap();
        assert_eq!(out.coord_index, vec![0, 1, 2, FACE_END]);
        assert_eq!(out.index_position_map, vec![0, 1, 2, -1]);
        assert_eq!(out.face_index_map, vec![0]);
    }

    #[test]
    fn test_quad_splits_along_shorter_diagonal() {
        // A tall thin quad: diagonal 1-3 is much shorter than 0-2.
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.1, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 0.1, 0.0),
        ];
        let out = triangulate(&vertices, &[0, 1, 2, 3, FACE_END]).unwrap();
        assert_eq!(
            out.coord_index,
            vec![0, 1, 3, FACE_END, 1, 2, 3, FACE_END]
        );
        assert_eq!(out.face_index_map, vec![0, 0]);

        // Shorter 0-2 diagonal picks the other split.
        let vertices = vec![
            DVec3::new(0.0, 0.1, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.1, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let out = triangulate(&vertices, &[0, 1, 2, 3, FACE_END]).unwrap();
        assert_eq!(
            out.coord_index,
            vec![0, 1, 2, FACE_END, 0, 2, 3, FACE_END]
        );
    }

    #[test]
    fn test_quad_split_preserves_area() {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.5, 1.5, 0.0),
            DVec3::new(0.2, 1.2, 0.0),
        ];
        let quad_area = triangle_area(vertices[0], vertices[1], vertices[2])
            + triangle_area(vertices[0], vertices[2], vertices[3]);

        let out = triangulate(&vertices, &[0, 1, 2, 3, FACE_END]).unwrap();
        let mut split_area = 0.0;
        for face in out.coord_index.chunks_exact(4) {
            split_area += triangle_area(
                vertices[face[0] as usize],
                vertices[face[1] as usize],
                vertices[face[2] as usize],
            );
        }
        assert_relative_eq!(split_area, quad_area, epsilon = 1.0e-12);
    }

    #[test]
    fn test_mixed_faces_and_maps() {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ];
        // One quad then one triangle.
        let stream = [0, 1, 2, 3, FACE_END, 1, 4, 2, FACE_END];
        let out = triangulate(&vertices, &stream).unwrap();

        assert_eq!(out.triangle_count(), 3);
        assert_eq!(out.face_index_map, vec![0, 0, 1]);
        // The triangle's corners map back past the quad's sentinel.
        assert_eq!(&out.index_position_map[8..], &[5, 6, 7, -1]);
        // Every 4th entry of the stream is the sentinel.
        assert!(out.coord_index.iter().skip(3).step_by(4).all(|&i| i == FACE_END));
    }

    #[test]
    fn test_face_too_small_aborts() {
        let vertices = vec![DVec3::ZERO, DVec3::X];
        let result = triangulate(&vertices, &[0, 1, FACE_END]);
        assert_eq!(result, Err(MeshError::FaceTooSmall));
    }

    #[test]
    fn test_pentagon_is_rejected() {
        let vertices = vec![DVec3::ZERO; 5];
        let result = triangulate(&vertices, &[0, 1, 2, 3, 4, FACE_END]);
        assert_eq!(result, Err(MeshError::UnsupportedFace(5)));
    }

    #[test]
    fn test_index_at_vertex_count_aborts() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let result = triangulate(&vertices, &[0, 1, 3, FACE_END]);
        assert_eq!(
            result,
            Err(MeshError::CoordIndexOutOfRange {
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_trailing_unterminated_face_is_dropped() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let out = triangulate(&vertices, &[0, 1, 2, FACE_END, 0, 1]).unwrap();
        assert_eq!(out.triangle_count(), 1);
    }
}
