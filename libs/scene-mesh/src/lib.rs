//! # Scene Mesh
//!
//! Converts a scene tree from `scene-graph` into canonical triangulated
//! meshes. Every shape's geometry, parametric primitive or authored polygon
//! set, ends up as a sentinel-terminated triangle
//! [`IndexedFaceSet`](scene_graph::IndexedFaceSet), ready for renderers and
//! collision checkers that only consume triangles.
//!
//! ## Architecture
//!
//! ```text
//! scene-graph (SceneNode tree) → scene-mesh (MeshShaper) → triangulated tree
//! ```
//!
//! ## Pipeline
//!
//! - **Primitives**: box, cone, cylinder, sphere and elevation grid are
//!   tessellated directly
//! - **Triangulation**: authored faces split into triangles (quads along the
//!   shorter diagonal), with remap tables for the attribute bindings
//! - **Attribute remapping**: color and normal indices rebuilt against the
//!   new triangle stream
//! - **Normal generation**: crease-angle smoothed per-vertex normals, or one
//!   flat normal per face
//!
//! Shapes that cannot be converted are removed from their parent group and
//! reported through the shaper's diagnostic sink.
//!
//! ## Usage
//!
//! ```rust
//! use scene_mesh::MeshShaper;
//! use scene_graph::{Geometry, SceneNode, ShapeNode};
//! use glam::DVec3;
//!
//! let mut root = SceneNode::Shape(ShapeNode::new(Geometry::Box {
//!     size: DVec3::splat(2.0),
//! }));
//! let mut shaper = MeshShaper::new();
//! shaper.apply(&mut root).unwrap();
//! ```

pub mod diagnostics;
pub mod error;
pub mod normals;
pub mod primitives;
pub mod registry;
pub mod remap;
pub mod shaper;
pub mod triangulate;

pub use diagnostics::MessageSink;
pub use error::MeshError;
pub use normals::generate_normals;
pub use registry::OriginalGeometryRegistry;
pub use remap::AttributeKind;
pub use shaper::MeshShaper;
pub use triangulate::{triangulate, Triangulation};
