//! # Indexed Face Set
//!
//! The canonical mesh format: a vertex array plus a flat, sentinel-terminated
//! per-face index stream, with optional color and normal attributes.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Sentinel value marking the end of one face's index run in a flat index
/// stream.
pub const FACE_END: i32 = -1;

/// An indexed polygon mesh.
///
/// Faces are encoded in `coord_index` as runs of vertex indices terminated
/// by [`FACE_END`]. After conversion every run holds exactly three indices.
/// Color and normal attributes are optional and independently bound either
/// per vertex (indexed per mesh corner) or per face ("direct": one value per
/// face).
///
/// # Example
///
/// ```rust
/// use scene_graph::IndexedFaceSet;
/// use glam::DVec3;
///
/// let mut mesh = IndexedFaceSet::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedFaceSet {
    /// Vertex positions; `None` models an authored mesh without a
    /// coordinate node.
    pub coord: Option<Vec<DVec3>>,
    /// Flat, sentinel-terminated vertex index stream.
    pub coord_index: Vec<i32>,
    /// Optional RGB colors.
    pub color: Option<Vec<[f32; 3]>>,
    /// Color index stream; empty means implicit mapping.
    pub color_index: Vec<i32>,
    /// Whether colors bind per vertex (corner) or per face.
    pub color_per_vertex: bool,
    /// Optional unit normals.
    pub normal: Option<Vec<DVec3>>,
    /// Normal index stream; empty means implicit mapping.
    pub normal_index: Vec<i32>,
    /// Whether normals bind per vertex (corner) or per face.
    pub normal_per_vertex: bool,
    /// Threshold angle in radians below which adjacent faces are smoothed
    /// together during normal generation.
    pub crease_angle: f64,
}

impl Default for IndexedFaceSet {
    fn default() -> Self {
        Self {
            coord: None,
            coord_index: Vec::new(),
            color: None,
            color_index: Vec::new(),
            color_per_vertex: true,
            normal: None,
            normal_index: Vec::new(),
            normal_per_vertex: true,
            crease_angle: 0.0,
        }
    }
}

impl IndexedFaceSet {
    /// Creates an empty mesh with an allocated coordinate array, ready for
    /// vertex insertion.
    pub fn new() -> Self {
        Self {
            coord: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.coord.as_ref().map_or(0, Vec::len)
    }

    /// Returns the number of faces in a triangulated stream.
    ///
    /// Only meaningful once every face is a triangle (3 indices + sentinel).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.coord_index.len() / 4
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> i32 {
        let coord = self.coord.get_or_insert_with(Vec::new);
        coord.push(position);
        (coord.len() - 1) as i32
    }

    /// Adds a triangle as three indices followed by the face sentinel.
    pub fn add_triangle(&mut self, v0: i32, v1: i32, v2: i32) {
        self.coord_index.extend_from_slice(&[v0, v1, v2, FACE_END]);
    }

    /// Returns true when every face in the stream is a triangle and every
    /// index references an existing vertex.
    pub fn is_triangulated(&self) -> bool {
        if self.coord_index.len() % 4 != 0 {
            return false;
        }
        let vertex_count = self.vertex_count() as i32;
        self.coord_index.chunks_exact(4).all(|face| {
            face[3] == FACE_END && face[..3].iter().all(|&i| i >= 0 && i < vertex_count)
        })
    }
}
