//! # Normal Generation
//!
//! Synthesizes normals for a triangulated
//! [`IndexedFaceSet`](scene_graph::IndexedFaceSet) that carries none. The
//! mesh's crease angle selects the output shape: a positive angle produces
//! smoothed per-vertex normals indexed through a sentinel-terminated
//! `normal_index` stream, a zero angle produces one flat normal per face.
//!
//! Smoothing works on a per-vertex adjacency table. Each vertex records the
//! faces that touch it, skipping a face when an already recorded face has
//! the same normal, so coplanar fans collapse to a single representative.
//! A corner's normal is then the normalized sum of every adjacent face
//! normal whose angle to the corner's own face stays inside the crease
//! angle.

use config::constants::NORMAL_TOLERANCE;
use glam::DVec3;
use scene_graph::{IndexedFaceSet, FACE_END};

/// Replaces the mesh's normals with generated ones.
///
/// The mesh must already be triangulated. Meshes without coordinates are
/// left untouched.
pub fn generate_normals(mesh: &mut IndexedFaceSet) {
    let Some(coord) = mesh.coord.as_ref() else {
        return;
    };
    let vertex_count = coord.len();
    let triangle_count = mesh.triangle_count();

    let mut gen = NormalGenerator::new(vertex_count, triangle_count);
    gen.compute_face_normals(coord, &mesh.coord_index);

    let (normals, normal_index, per_vertex) = if mesh.crease_angle > 0.0 {
        gen.record_adjacency(&mesh.coord_index);
        let index = gen.smoothed_indices(&mesh.coord_index, mesh.crease_angle);
        (gen.normals, index, true)
    } else {
        let index = gen.flat_indices(&mesh.coord_index);
        (gen.normals, index, false)
    };

    mesh.normal = Some(normals);
    mesh.normal_index = normal_index;
    mesh.normal_per_vertex = per_vertex;
}

struct NormalGenerator {
    face_normals: Vec<DVec3>,
    /// Faces touching each vertex, one representative per distinct normal.
    vertex_faces: Vec<Vec<usize>>,
    /// The emitted normals, shared across corners where values coincide.
    normals: Vec<DVec3>,
    /// Normal indices already registered at each vertex.
    vertex_normal_indices: Vec<Vec<usize>>,
    /// Lazily created shared entry for a face's unsmoothed normal.
    face_normal_index: Vec<Option<usize>>,
}

impl NormalGenerator {
    fn new(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            face_normals: Vec::with_capacity(triangle_count),
            vertex_faces: vec![Vec::new(); vertex_count],
            normals: Vec::new(),
            vertex_normal_indices: vec![Vec::new(); vertex_count],
            face_normal_index: vec![None; triangle_count],
        }
    }

    fn compute_face_normals(&mut self, coord: &[DVec3], coord_index: &[i32]) {
        for face in coord_index.chunks_exact(4) {
            let v0 = coord[face[0] as usize];
            let v1 = coord[face[1] as usize];
            let v2 = coord[face[2] as usize];
            self.face_normals
                .push((v1 - v0).cross(v2 - v0).normalize_or_zero());
        }
    }

    fn record_adjacency(&mut self, coord_index: &[i32]) {
        for (f, face) in coord_index.chunks_exact(4).enumerate() {
            let normal = self.face_normals[f];
            for &v in &face[..3] {
                let recorded = &mut self.vertex_faces[v as usize];
                let duplicate = recorded
                    .iter()
                    .any(|&g| (self.face_normals[g] - normal).length_squared() <= NORMAL_TOLERANCE);
                if !duplicate {
                    recorded.push(f);
                }
            }
        }
    }

    fn smoothed_indices(&mut self, coord_index: &[i32], crease_angle: f64) -> Vec<i32> {
        let cos_crease = crease_angle.cos();
        let mut normal_index = Vec::with_capacity(coord_index.len());

        for (f, face) in coord_index.chunks_exact(4).enumerate() {
            let face_normal = self.face_normals[f];
            for &v in &face[..3] {
                let v = v as usize;
                let mut sum = face_normal;
                let mut is_face_normal = true;
                for &adj in &self.vertex_faces[v] {
                    let adj_normal = self.face_normals[adj];
                    let cosa = face_normal.dot(adj_normal)
                        / (face_normal.length() * adj_normal.length());
                    if cosa > cos_crease {
                        sum += adj_normal;
                        is_face_normal = false;
                    }
                }
                let idx = if is_face_normal {
                    self.shared_face_entry(f)
                } else {
                    self.vertex_entry(v, sum.normalize_or_zero())
                };
                if !self.vertex_normal_indices[v].contains(&idx) {
                    self.vertex_normal_indices[v].push(idx);
                }
                normal_index.push(idx as i32);
            }
            normal_index.push(FACE_END);
        }
        normal_index
    }

    fn flat_indices(&mut self, coord_index: &[i32]) -> Vec<i32> {
        let mut normal_index = Vec::with_capacity(coord_index.len() / 4);

        for (f, face) in coord_index.chunks_exact(4).enumerate() {
            let normal = self.face_normals[f];
            let existing = face[..3].iter().find_map(|&v| {
                self.vertex_normal_indices[v as usize]
                    .iter()
                    .copied()
                    .find(|&i| (self.normals[i] - normal).length_squared() <= NORMAL_TOLERANCE)
            });
            let idx = match existing {
                Some(i) => i,
                None => {
                    let i = self.normals.len();
                    self.normals.push(normal);
                    i
                }
            };
            for &v in &face[..3] {
                if !self.vertex_normal_indices[v as usize].contains(&idx) {
                    self.vertex_normal_indices[v as usize].push(idx);
                }
            }
            normal_index.push(idx as i32);
        }
        normal_index
    }

    fn shared_face_entry(&mut self, f: usize) -> usize {
        match self.face_normal_index[f] {
            Some(i) => i,
            None => {
                let i = self.normals.len();
                self.normals.push(self.face_normals[f]);
                self.face_normal_index[f] = Some(i);
                i
            }
        }
    }

    fn vertex_entry(&mut self, v: usize, normal: DVec3) -> usize {
        let existing = self.vertex_normal_indices[v]
            .iter()
            .copied()
            .find(|&i| (self.normals[i] - normal).length_squared() <= NORMAL_TOLERANCE);
        match existing {
            Some(i) => i,
            None => {
                let i = self.normals.len();
                self.normals.push(normal);
                i
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    /// Two triangles sharing the edge (1, 2), both in the xy plane.
    fn coplanar_pair() -> IndexedFaceSet {
        let mut mesh = IndexedFaceSet::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 1, 3);
        mesh
    }

    /// Two triangles meeting at a right angle along the edge (1, 2).
    fn folded_pair() -> IndexedFaceSet {
        let mut mesh = IndexedFaceSet::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, -1.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 3, 2);
        mesh
    }

    #[test]
    fn test_coplanar_faces_share_a_smoothed_normal() {
        let mut mesh = coplanar_pair();
        mesh.crease_angle = PI;
        generate_normals(&mut mesh);

        assert!(mesh.normal_per_vertex);
        assert_eq!(mesh.normal_index.len(), 8);
        let normals = mesh.normal.as_ref().unwrap();
        for &i in mesh.normal_index.iter().filter(|&&i| i != FACE_END) {
            assert_relative_eq!(normals[i as usize].z, 1.0, epsilon = 1.0e-12);
        }
        // shared vertices reuse the entry registered by the first face
        assert_eq!(mesh.normal_index[2], mesh.normal_index[4]);
    }

    #[test]
    fn test_flat_box_has_six_distinct_normals() {
        let mut mesh = create_box(DVec3::splat(2.0)).unwrap();
        generate_normals(&mut mesh);

        assert!(!mesh.normal_per_vertex);
        assert_eq!(mesh.normal_index.len(), 12);
        assert!(mesh.normal_index.iter().all(|&i| i != FACE_END));
        let normals = mesh.normal.as_ref().unwrap();
        assert_eq!(normals.len(), 6);
        for n in normals {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn test_sharp_fold_keeps_face_normals() {
        let mut mesh = folded_pair();
        mesh.crease_angle = FRAC_PI_4;
        generate_normals(&mut mesh);

        let normals = mesh.normal.as_ref().unwrap();
        // corner 0 of face 0 and corner 0 of face 1 keep their own planes
        let first = normals[mesh.normal_index[0] as usize];
        let second = normals[mesh.normal_index[4] as usize];
        assert_relative_eq!(first.dot(second).abs(), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn test_wide_crease_merges_across_fold() {
        let mut mesh = folded_pair();
        mesh.crease_angle = PI;
        generate_normals(&mut mesh);

        let normals = mesh.normal.as_ref().unwrap();
        // the shared edge vertex blends both planes
        let blended = normals[mesh.normal_index[1] as usize];
        assert!(blended.z > 0.0);
        assert!(blended.x > 0.0);
        assert_relative_eq!(blended.length(), 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn test_mesh_without_coordinates_is_untouched() {
        let mut mesh = IndexedFaceSet::new();
        mesh.coord = None;
        generate_normals(&mut mesh);
        assert!(mesh.normal.is_none());
    }
}
