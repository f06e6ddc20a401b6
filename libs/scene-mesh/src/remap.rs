//! # Attribute Remapping
//!
//! Rebuilds per-vertex/per-face color and normal bindings after
//! triangulation, using the remap tables the triangulator produced. Bound
//! violations are reported through the diagnostic sink; per-vertex rebuilds
//! keep filling the remaining slots so the partial result stays inspectable,
//! but the first violation still fails the enclosing conversion.

use crate::diagnostics::MessageSink;
use crate::error::MeshError;
use crate::triangulate::Triangulation;
use scene_graph::FACE_END;
use std::fmt;

/// Which attribute a remap pass is operating on. Determines the wording of
/// diagnostics only; color and normal remapping share all logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// RGB colors.
    Color,
    /// Unit normals.
    Normal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Color => write!(f, "colors"),
            AttributeKind::Normal => write!(f, "normals"),
        }
    }
}

/// Re-derives one attribute's binding for the triangulated mesh.
///
/// `values` is the attribute array (if any), `indices` its index stream,
/// `per_vertex` its binding mode, and `vertex_count` the mesh's vertex
/// count. Dispatches over the (value count × index presence × binding)
/// table; see the module docs for the failure policy.
pub(crate) fn check_and_remap_indices<T: Clone>(
    kind: AttributeKind,
    values: Option<&mut Vec<T>>,
    indices: &mut Vec<i32>,
    per_vertex: bool,
    vertex_count: usize,
    triangulation: &Triangulation,
    sink: &MessageSink,
) -> Result<(), MeshError> {
    let value_count = values.as_deref().map_or(0, Vec::len);

    if value_count == 0 {
        if indices.is_empty() {
            return Ok(());
        }
        let err = MeshError::IndexWithoutValues { kind };
        sink.post(&err.to_string());
        return Err(err);
    }

    if indices.is_empty() {
        if per_vertex {
            // Implicit identity mapping: one value per vertex.
            if value_count < vertex_count {
                let err = MeshError::TooFewForVertices { kind };
                sink.post(&err.to_string());
                return Err(err);
            }
            return Ok(());
        }
        // Direct binding without indices: the value array itself must be
        // rebuilt, one value per new triangle.
        return match values {
            Some(values) => remap_direct_values(kind, values, triangulation, sink),
            None => Ok(()),
        };
    }

    let org_indices = std::mem::take(indices);
    let mut first_err = None;

    if per_vertex {
        indices.resize(triangulation.index_position_map.len(), 0);
        for (i, &org_position) in triangulation.index_position_map.iter().enumerate() {
            if org_position < 0 {
                indices[i] = FACE_END;
                continue;
            }
            match org_indices.get(org_position as usize) {
                Some(&index) if index < value_count as i32 => indices[i] = index,
                _ => {
                    let err = MeshError::AttributeIndexOutOfRange { kind };
                    sink.post(&err.to_string());
                    first_err.get_or_insert(err);
                }
            }
        }
    } else {
        indices.resize(triangulation.face_index_map.len(), 0);
        for (i, &org_face) in triangulation.face_index_map.iter().enumerate() {
            match org_indices.get(org_face as usize) {
                Some(&index) if index < value_count as i32 => indices[i] = index,
                Some(_) => {
                    let err = MeshError::AttributeIndexOutOfRange { kind };
                    sink.post(&err.to_string());
                    first_err.get_or_insert(err);
                }
                None => {
                    let err = MeshError::TooFewForFaces { kind };
                    sink.post(&err.to_string());
                    first_err.get_or_insert(err);
                }
            }
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Rebuilds a directly bound value array: one value per new triangle, copied
/// from the original face the triangle came from.
fn remap_direct_values<T: Clone>(
    kind: AttributeKind,
    values: &mut Vec<T>,
    triangulation: &Triangulation,
    sink: &MessageSink,
) -> Result<(), MeshError> {
    let org_values = std::mem::take(values);
    values.reserve(triangulation.face_index_map.len());

    for &org_face in &triangulation.face_index_map {
        match org_values.get(org_face as usize) {
            Some(value) => values.push(value.clone()),
            None => {
                let err = MeshError::TooFewForFaces { kind };
                sink.post(&err.to_string());
                return Err(err);
            }
        }
    }
    Ok(())
}
