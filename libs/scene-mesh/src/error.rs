//! # Mesh Errors
//!
//! Error types for shape conversion. All validation outcomes are expected
//! and reported through these variants; none of them abort the traversal of
//! sibling shapes.

use crate::remap::AttributeKind;
use thiserror::Error;

/// Errors that can occur while converting one shape's geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The coordinate index stream references a vertex that does not exist.
    #[error("the coordIndex field has an index ({index}) over the size of the vertices in the coord field ({vertex_count})")]
    CoordIndexOutOfRange {
        /// The offending index value.
        index: i32,
        /// Number of vertices in the coordinate array.
        vertex_count: usize,
    },

    /// A face with fewer than three vertices cannot be triangulated.
    #[error("the number of vertices of a face is less than three")]
    FaceTooSmall,

    /// Faces with five or more vertices are out of scope.
    #[error("a face has {0} vertices; only triangles and quads are supported")]
    UnsupportedFace(usize),

    /// Triangulation produced no faces at all.
    #[error("the converted mesh has no faces")]
    EmptyMesh,

    /// An index array was supplied without any attribute values to index.
    #[error("an IndexedFaceSet has no {kind}, but it has a non-empty index field of {kind}")]
    IndexWithoutValues {
        /// Which attribute the index array belongs to.
        kind: AttributeKind,
    },

    /// An implicit per-vertex binding needs at least one value per vertex.
    #[error("the number of {kind} is less than the number of vertices")]
    TooFewForVertices {
        /// Which attribute is underpopulated.
        kind: AttributeKind,
    },

    /// A per-face binding needs one value (or index) per original face.
    #[error("the number of {kind} is less than the number of faces")]
    TooFewForFaces {
        /// Which attribute is underpopulated.
        kind: AttributeKind,
    },

    /// An attribute index exceeds the attribute array's length.
    #[error("there is an index of {kind} beyond the size of {kind}")]
    AttributeIndexOutOfRange {
        /// Which attribute the index belongs to.
        kind: AttributeKind,
    },

    /// A primitive carries a negative size, radius or height.
    #[error("{primitive}: wrong value")]
    InvalidParameter {
        /// Variant name of the rejected primitive.
        primitive: &'static str,
    },

    /// The elevation grid's dimensions disagree with its sample count.
    #[error("ElevationGrid: {x_dimension} x {z_dimension} does not match the number of height samples ({samples})")]
    GridDimensionMismatch {
        /// Grid points along x.
        x_dimension: u32,
        /// Grid points along z.
        z_dimension: u32,
        /// Number of height samples supplied.
        samples: usize,
    },

    /// The geometry variant has no conversion.
    #[error("{0} geometry is not convertible to a triangle mesh")]
    UnsupportedGeometry(&'static str),
}
