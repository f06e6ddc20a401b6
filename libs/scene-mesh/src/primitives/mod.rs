//! # Primitive Meshers
//!
//! One module per parametric primitive, each emitting an explicit
//! vertex/triangle [`IndexedFaceSet`](scene_graph::IndexedFaceSet). Curved
//! primitives share the angular division count from
//! [`config::MeshConfig`]; every mesher rejects negative size, radius or
//! height parameters before emitting a single vertex.

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod elevation_grid;
pub mod sphere;

pub use cone::create_cone;
pub use cuboid::create_box;
pub use cylinder::create_cylinder;
pub use elevation_grid::create_elevation_grid;
pub use sphere::create_sphere;
