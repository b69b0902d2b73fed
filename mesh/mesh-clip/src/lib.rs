//! Bounding-box clipping and dense re-indexing for triangle meshes.
//!
//! Segment meshes pulled from a large volume usually extend far beyond the
//! region of interest. This crate cuts a mesh down to an axis-aligned box
//! and compacts what is left:
//!
//! 1. **Vertex filter** - every vertex is tested against the box using its
//!    original coordinates. Survivors are translated by `-offset` and packed
//!    in their original order. A [`RetentionMap`] records the new index of
//!    each survivor.
//! 2. **Face remap** - every triangle is rewritten through the retention
//!    map. A triangle that loses any vertex is dropped whole; a triangle
//!    that does not have three distinct vertices is dropped as degenerate.
//!
//! With bounds disabled every vertex survives, the retention map is the
//! identity and only the offset is applied. Faces pass through exactly as
//! given, repeated indices included; only the index range is checked.
//!
//! # Layer 0 Crate
//!
//! No I/O. Emits `tracing` events only.
//!
//! # Example
//!
//! ```
//! use mesh_clip::{clip_mesh, ClipParams};
//! use mesh_types::{Aabb, IndexedMesh, MeshTopology};
//!
//! let positions = [0.0, 0.0, 0.0, 5.0, 5.0, 5.0, 10.0, 10.0, 10.0];
//! let mesh = IndexedMesh::from_flat(&positions, &[0, 1, 2]).unwrap();
//!
//! let params = ClipParams::default()
//!     .with_bounds(Aabb::from_arrays([0.0, 0.0, 0.0], [6.0, 6.0, 6.0]));
//! let clipped = clip_mesh(&mesh, &params).unwrap();
//!
//! // Vertex 2 lies outside, so the only triangle is lost.
//! assert_eq!(clipped.mesh.vertex_count(), 2);
//! assert_eq!(clipped.mesh.face_count(), 0);
//! println!("{clipped}");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod clip;
mod error;
mod filter;
mod params;
mod remap;
mod retention;

pub use clip::{clip_mesh, ClipOutput};
pub use error::{ClipError, ClipResult};
pub use filter::filter_vertices;
pub use params::ClipParams;
pub use remap::{pass_through_faces, remap_faces, RemappedFaces};
pub use retention::RetentionMap;
