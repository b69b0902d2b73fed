//! Wavefront OBJ/MTL file I/O for segment meshes.
//!
//! - **OBJ** - positions with optional per-vertex colors, triangle faces,
//!   optional `mtllib`/`usemtl` header. Read and write.
//! - **MTL** - one flat material per library. Write only.
//!
//! Segments are exported as a pair of files sharing the stem `seg_<id>`:
//! the MTL is written first, then the OBJ, whose first two lines link to it.
//!
//! # Dependencies
//!
//! Builds on `mesh-types` for geometry and on `mesh-material` for the
//! material a segment is written with. No clipping or batching here.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, save_segment};
//! use mesh_material::Material;
//! use mesh_types::{Rgb, SegmentId};
//! use std::path::Path;
//!
//! let mesh = load_obj("raw.obj").unwrap();
//! let material = Material::flat(SegmentId::new(42), Rgb::new(1.0, 0.5, 0.0));
//!
//! // Writes ./out/seg_42.mtl and ./out/seg_42.obj
//! let files = save_segment(Path::new("out"), &mesh, &material).unwrap();
//! println!("{}", files.obj.display());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mtl;
mod obj;
mod segment;

pub use error::{IoError, IoResult};
pub use mtl::write_mtl;
pub use obj::{load_obj, read_obj, save_obj, write_obj, write_obj_body, MaterialLink};
pub use segment::{save_segment, SegmentFiles};
