//! # Scene Nodes
//!
//! The polymorphic scene tree: groups owning ordered children, proto
//! instances referencing a resolved template node, shapes owning one
//! geometry, and a catch-all for node kinds the mesh pipeline ignores.

use crate::geometry::Geometry;
use std::sync::atomic::{AtomicU64, Ordering};

/// A node in the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// Grouping node with ordered children.
    Group(GroupNode),
    /// Instance of an externally defined node template.
    ProtoInstance(ProtoInstance),
    /// Renderable shape carrying one geometry.
    Shape(ShapeNode),
    /// Any other node kind (lights, viewpoints, sensors); left untouched by
    /// the conversion engine.
    Other {
        /// Node type name, for diagnostics.
        type_name: String,
    },
}

/// A grouping node owning an ordered child sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    /// Ordered children, addressed by position.
    pub children: Vec<SceneNode>,
}

impl GroupNode {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group from children.
    pub fn with_children(children: Vec<SceneNode>) -> Self {
        Self { children }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<&SceneNode> {
        self.children.get(index)
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Removes and returns the child at `index`.
    ///
    /// Later siblings shift down by one; callers that remove while iterating
    /// must collect indices first and compact afterwards.
    pub fn remove_child(&mut self, index: usize) -> SceneNode {
        self.children.remove(index)
    }
}

/// A reference to a reusable, externally defined node template.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoInstance {
    /// Prototype name, for diagnostics.
    pub name: String,
    /// The resolved actual node, if the loader resolved the prototype.
    pub actual: Option<Box<SceneNode>>,
}

impl ProtoInstance {
    /// Creates a proto instance with a resolved actual node.
    pub fn resolved(name: impl Into<String>, actual: SceneNode) -> Self {
        Self {
            name: name.into(),
            actual: Some(Box::new(actual)),
        }
    }

    /// Creates an unresolved proto instance.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actual: None,
        }
    }
}

/// Process-unique identity of a shape node.
///
/// Used as the key of non-owning side tables (the original-geometry
/// registry); ids are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A shape node owning one geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    id: ShapeId,
    /// The shape's surface geometry; replaced by conversion.
    pub geometry: Geometry,
}

impl ShapeNode {
    /// Creates a shape with a fresh identity.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: ShapeId::fresh(),
            geometry,
        }
    }

    /// Returns the shape's stable identity.
    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_are_unique() {
        let a = ShapeNode::new(Geometry::Sphere { radius: 1.0 });
        let b = ShapeNode::new(Geometry::Sphere { radius: 1.0 });
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_shape_id_survives_clone() {
        let a = ShapeNode::new(Geometry::Sphere { radius: 1.0 });
        let b = a.clone();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_group_child_access() {
        let mut group = GroupNode::new();
        group.add_child(SceneNode::Other {
            type_name: "PointLight".into(),
        });
        group.add_child(SceneNode::Group(GroupNode::new()));
        assert_eq!(group.child_count(), 2);
        assert!(matches!(group.child(0), Some(SceneNode::Other { .. })));
        assert!(group.child(2).is_none());

        let removed = group.remove_child(0);
        assert!(matches!(removed, SceneNode::Other { .. }));
        assert_eq!(group.child_count(), 1);
        assert!(matches!(group.child(0), Some(SceneNode::Group(_))));
    }

    #[test]
    fn test_proto_instance_resolution() {
        let resolved = ProtoInstance::resolved("Robot", SceneNode::Group(GroupNode::new()));
        assert!(resolved.actual.is_some());
        let unresolved = ProtoInstance::unresolved("Robot");
        assert!(unresolved.actual.is_none());
    }
}
