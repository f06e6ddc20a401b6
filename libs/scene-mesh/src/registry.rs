//! # Original Geometry Registry
//!
//! Keeps the pre-conversion geometry of every shape a
//! [`MeshShaper`](crate::MeshShaper) replaced, keyed by the shape's stable
//! [`ShapeId`](scene_graph::ShapeId). Callers that need the parametric
//! description of a converted primitive (its radius, extents, division
//! count inputs) look it up here after conversion.

use scene_graph::{Geometry, ShapeId};
use std::collections::HashMap;

/// Maps converted shapes back to the geometry they carried before
/// conversion.
#[derive(Debug, Default)]
pub struct OriginalGeometryRegistry {
    entries: HashMap<ShapeId, Geometry>,
}

impl OriginalGeometryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-conversion geometry of a shape. A later conversion
    /// of the same shape keeps the oldest entry.
    pub fn insert(&mut self, id: ShapeId, geometry: Geometry) {
        self.entries.entry(id).or_insert(geometry);
    }

    pub fn get(&self, id: ShapeId) -> Option<&Geometry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
