//! Core mesh types for segment mesh extraction.
//!
//! This crate provides the foundational types shared by the extraction
//! pipeline:
//!
//! - [`Vertex`] - A point in 3D space with an optional broadcast color
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box used for clipping
//! - [`Rgb`] - Floating point color with components in `[0, 1]`
//! - [`SegmentId`] - Identifier of one segmented object
//!
//! # Layer 0 Crate
//!
//! This crate has no I/O and no logging. It can be used in:
//! - CLI tools
//! - Servers and batch workers
//! - Python bindings
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`, usually in
//! the voxel or nanometer space of the segmentation the mesh came from.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Point3, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod color;
mod mesh;
mod segment;
mod traits;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use color::Rgb;
pub use mesh::IndexedMesh;
pub use segment::SegmentId;
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
