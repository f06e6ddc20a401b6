//! # Geometry Variants
//!
//! The closed set of surface geometries a shape node can carry. Primitive
//! variants hold only parametric fields; [`IndexedFaceSet`] is the canonical
//! mesh every shape converges to after conversion.

use crate::face_set::IndexedFaceSet;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A shape node's surface geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Axis-aligned box given by its full extents.
    Box {
        /// Full edge lengths along x, y and z.
        size: DVec3,
    },
    /// Cone with its apex on the +y axis.
    Cone {
        /// Radius of the bottom disc.
        bottom_radius: f64,
        /// Height from the bottom disc to the apex.
        height: f64,
    },
    /// Cylinder centered on the y axis.
    Cylinder {
        /// Radius of both rims.
        radius: f64,
        /// Full height along y.
        height: f64,
    },
    /// Sphere centered at the origin.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
    /// Regular height-field grid in the x/z plane.
    ElevationGrid(ElevationGrid),
    /// Swept cross-section; carried for classification only, conversion
    /// always rejects it.
    Extrusion(Extrusion),
    /// Authored or converted polygon mesh.
    IndexedFaceSet(IndexedFaceSet),
}

impl Geometry {
    /// Returns the variant name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Box { .. } => "Box",
            Geometry::Cone { .. } => "Cone",
            Geometry::Cylinder { .. } => "Cylinder",
            Geometry::Sphere { .. } => "Sphere",
            Geometry::ElevationGrid(_) => "ElevationGrid",
            Geometry::Extrusion(_) => "Extrusion",
            Geometry::IndexedFaceSet(_) => "IndexedFaceSet",
        }
    }

    /// Returns the contained face set, if this geometry is one.
    pub fn as_face_set(&self) -> Option<&IndexedFaceSet> {
        match self {
            Geometry::IndexedFaceSet(face_set) => Some(face_set),
            _ => None,
        }
    }
}

/// A uniform grid of height samples spanning the x/z plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationGrid {
    /// Number of grid points along x.
    pub x_dimension: u32,
    /// Number of grid points along z.
    pub z_dimension: u32,
    /// Distance between grid points along x.
    pub x_spacing: f64,
    /// Distance between grid points along z.
    pub z_spacing: f64,
    /// Height samples, row-major in z; must contain exactly
    /// `x_dimension * z_dimension` entries.
    pub height: Vec<f64>,
    /// Crease angle forwarded to normal generation.
    pub crease_angle: f64,
}

/// A 2D cross-section swept along a 3D spine.
///
/// Solid procedural extrusion is out of scope for the conversion engine; the
/// fields exist so loaders can still represent the node and diagnostics can
/// name it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrusion {
    /// The 2D profile being swept.
    pub cross_section: Vec<DVec2>,
    /// The 3D path the profile is swept along.
    pub spine: Vec<DVec3>,
}
