//! # Mesh Shaper
//!
//! The conversion driver. [`MeshShaper`] walks a scene tree depth-first and
//! replaces every shape's geometry with a canonical triangulated
//! [`IndexedFaceSet`](scene_graph::IndexedFaceSet): primitives are
//! tessellated with the configured division count, authored face sets are
//! triangulated in place with their color and normal bindings re-derived,
//! and normals are generated wherever a mesh ends up without any.
//!
//! Conversion is atomic per shape. A face set is cloned, converted, and only
//! committed on success, so a failing shape keeps its authored geometry.
//! Inside a group a failing child is reported through the diagnostic sink
//! and removed; its siblings keep their positions relative to each other. A
//! failure at the root (where no parent can remove the node) propagates out
//! of [`MeshShaper::apply`].

use crate::diagnostics::MessageSink;
use crate::error::MeshError;
use crate::normals::generate_normals;
use crate::primitives;
use crate::registry::OriginalGeometryRegistry;
use crate::remap::{check_and_remap_indices, AttributeKind};
use crate::triangulate::triangulate;
use config::constants::MeshConfig;
use scene_graph::{Geometry, IndexedFaceSet, SceneNode, ShapeId, ShapeNode};

/// Scene tree to triangle mesh converter.
pub struct MeshShaper {
    config: MeshConfig,
    sink: MessageSink,
    registry: OriginalGeometryRegistry,
}

impl Default for MeshShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshShaper {
    /// Creates a shaper with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    /// Creates a shaper with an explicit configuration.
    pub fn with_config(config: MeshConfig) -> Self {
        Self {
            config,
            sink: MessageSink::new(),
            registry: OriginalGeometryRegistry::new(),
        }
    }

    /// Registers a subscriber receiving one line per conversion diagnostic.
    pub fn subscribe(&mut self, subscriber: impl Fn(&str) + 'static) {
        self.sink.subscribe(subscriber);
    }

    /// Returns the pre-conversion geometry of a converted shape.
    pub fn original_geometry(&self, id: ShapeId) -> Option<&Geometry> {
        self.registry.get(id)
    }

    /// Converts every shape reachable from `root`.
    ///
    /// Inconvertible shapes below a group are removed from the tree; an
    /// inconvertible root has no parent to remove it from and fails the call
    /// instead, with the root's geometry left untouched.
    pub fn apply(&mut self, root: &mut SceneNode) -> Result<(), MeshError> {
        self.traverse(root).map_err(|err| {
            self.sink.post(&err.to_string());
            err
        })
    }

    fn traverse(&mut self, node: &mut SceneNode) -> Result<(), MeshError> {
        match node {
            SceneNode::ProtoInstance(proto) => match proto.actual.as_deref_mut() {
                Some(actual) => self.traverse(actual),
                None => Ok(()),
            },
            SceneNode::Group(group) => {
                let mut failed: Vec<usize> = Vec::new();
                for (i, child) in group.children.iter_mut().enumerate() {
                    if let Err(err) = self.traverse(child) {
                        self.sink
                            .post(&format!("{err}; the node is removed from the scene graph"));
                        failed.push(i);
                    }
                }
                if !failed.is_empty() {
                    let mut index = 0usize;
                    group.children.retain(|_| {
                        let keep = failed.binary_search(&index).is_err();
                        index += 1;
                        keep
                    });
                }
                Ok(())
            }
            SceneNode::Shape(shape) => self.convert_shape_node(shape),
            SceneNode::Other { .. } => Ok(()),
        }
    }

    fn convert_shape_node(&mut self, shape: &mut ShapeNode) -> Result<(), MeshError> {
        if let Geometry::IndexedFaceSet(face_set) = &shape.geometry {
            if face_set.coord.is_some() {
                // Clone-and-commit keeps the authored mesh intact on failure.
                let mut converted = face_set.clone();
                self.convert_indexed_face_set(&mut converted)?;
                if self.config.normal_generation && converted.normal.is_none() {
                    generate_normals(&mut converted);
                }
                shape.geometry = Geometry::IndexedFaceSet(converted);
                return Ok(());
            }
        }

        let mut mesh = self.dispatch_primitive(&shape.geometry)?;
        if self.config.normal_generation && mesh.normal.is_none() {
            generate_normals(&mut mesh);
        }
        let original = std::mem::replace(&mut shape.geometry, Geometry::IndexedFaceSet(mesh));
        self.registry.insert(shape.id(), original);
        Ok(())
    }

    fn dispatch_primitive(&self, geometry: &Geometry) -> Result<IndexedFaceSet, MeshError> {
        match geometry {
            Geometry::Box { size } => primitives::create_box(*size),
            Geometry::Cone {
                bottom_radius,
                height,
            } => primitives::create_cone(*bottom_radius, *height, self.config.division_count),
            Geometry::Cylinder { radius, height } => {
                primitives::create_cylinder(*radius, *height, self.config.division_count)
            }
            Geometry::Sphere { radius } => {
                primitives::create_sphere(*radius, self.config.division_count)
            }
            Geometry::ElevationGrid(grid) => primitives::create_elevation_grid(grid),
            Geometry::Extrusion(_) => Err(MeshError::UnsupportedGeometry("Extrusion")),
            // A face set without coordinates has nothing to triangulate.
            Geometry::IndexedFaceSet(_) => Err(MeshError::UnsupportedGeometry("IndexedFaceSet")),
        }
    }

    fn convert_indexed_face_set(&self, mesh: &mut IndexedFaceSet) -> Result<(), MeshError> {
        let vertices = mesh.coord.as_deref().unwrap_or(&[]);
        let vertex_count = vertices.len();
        let triangulation = triangulate(vertices, &mesh.coord_index)?;
        mesh.coord_index = triangulation.coord_index.clone();

        let color_result = check_and_remap_indices(
            AttributeKind::Color,
            mesh.color.as_mut(),
            &mut mesh.color_index,
            mesh.color_per_vertex,
            vertex_count,
            &triangulation,
            &self.sink,
        );
        let normal_result = check_and_remap_indices(
            AttributeKind::Normal,
            mesh.normal.as_mut(),
            &mut mesh.normal_index,
            mesh.normal_per_vertex,
            vertex_count,
            &triangulation,
            &self.sink,
        );

        if mesh.coord_index.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        color_result?;
        normal_result?;
        Ok(())
    }
}
