//! Polymesh Geometry - outline-to-mesh engine
//!
//! This crate provides:
//! - Quadratic Bezier evaluation for curved outline edges
//! - Tessellation of authored outlines into dense point loops
//! - Ear-clipping triangulation
//! - Render mesh assembly (positions, UVs, normals) and collider extrusion
//! - Outline editing and arc splicing ("merge")
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use polymesh_geometry::*;
//!
//! let mut outline = Outline::from_points([
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(4.0, 0.0, 0.0),
//!     Vec3::new(4.0, 3.0, 0.0),
//!     Vec3::new(0.0, 3.0, 0.0),
//! ]);
//! outline.set_curve(2, Vec3::new(2.0, 4.0, 0.0)).unwrap();
//!
//! let mut mesh = PolyMesh::from_outline(outline);
//! let report = mesh.rebuild();
//! assert!(report.status == TriangulationStatus::Complete);
//! assert_eq!(mesh.render_mesh().triangle_count(), report.edge_points - 2);
//! ```

// Outline data and authoring
mod curve;
mod edit;
mod intersect;
mod outline;

// Meshing
mod collider;
mod mesh;
mod transform;
mod triangulate;
mod vertex;

// Entity and collaborators
mod config;
mod error;
mod merge;
mod overlay;
mod polymesh;
mod sink;

// Re-exports
pub use curve::*;
pub use edit::*;
pub use intersect::*;
pub use outline::*;

pub use collider::*;
pub use mesh::*;
pub use transform::*;
pub use triangulate::*;
pub use vertex::*;

pub use config::*;
pub use error::*;
pub use merge::*;
pub use overlay::*;
pub use polymesh::*;
pub use sink::*;
