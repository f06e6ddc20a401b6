//! # Scene Graph
//!
//! The in-memory scene tree and geometry data model consumed by the
//! `scene-mesh` conversion engine.
//!
//! ## Architecture
//!
//! ```text
//! loader (external) → scene-graph (SceneNode tree) → scene-mesh (triangle meshes)
//! ```
//!
//! A scene is a tree of [`SceneNode`]s. Groups own ordered children, proto
//! instances reference an optionally resolved template node, and shapes own
//! one [`Geometry`]. Authored polygon meshes are [`IndexedFaceSet`]s with a
//! flat, sentinel-terminated coordinate index stream; the conversion engine
//! rewrites every shape's geometry into an all-triangle face set.

pub mod face_set;
pub mod geometry;
pub mod node;

pub use face_set::{IndexedFaceSet, FACE_END};
pub use geometry::{ElevationGrid, Extrusion, Geometry};
pub use node::{GroupNode, ProtoInstance, SceneNode, ShapeId, ShapeNode};
