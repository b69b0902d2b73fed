//! Batch extraction of segment meshes.
//!
//! For each requested segment id the [`Extractor`]:
//!
//! 1. fetches the raw mesh from a [`MeshSource`]
//! 2. clips it to the configured box and compacts it ([`mesh_clip`])
//! 3. paints it with the segment's color ([`mesh_material`])
//! 4. writes `seg_<id>.obj` and `seg_<id>.mtl` into the output directory
//!    ([`mesh_io`])
//!
//! Segments are independent. A segment that fails at any step is recorded
//! with the stage it reached and the cause, and the batch carries on. Only
//! an empty id list, a missing source or an unusable configuration stop a
//! batch, and they do so before any segment is processed.
//!
//! Segments run one at a time by default. With
//! [`ExtractConfig::parallel`] set they run on a bounded rayon pool; the
//! report keeps input order either way.
//!
//! # Example
//!
//! ```no_run
//! use mesh_extract::{ExtractConfig, Extractor, ObjDirectorySource};
//! use mesh_material::ColorMap;
//! use mesh_types::SegmentId;
//!
//! let source = ObjDirectorySource::new("raw_meshes");
//! let colors = ColorMap::from_json_file("colors.json").unwrap();
//! let config = ExtractConfig::from_json_file("extract.json").unwrap();
//!
//! let extractor = Extractor::builder()
//!     .source(&source)
//!     .colors(&colors)
//!     .config(config)
//!     .build()
//!     .unwrap();
//!
//! let report = extractor
//!     .run(&[SegmentId::new(864_691_135), SegmentId::new(864_691_136)])
//!     .unwrap();
//! println!("{report}");
//! for failure in report.failed() {
//!     eprintln!("{failure}");
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod extractor;
mod outcome;
mod report;
mod source;

pub use config::{ExtractConfig, DEFAULT_OUTPUT_DIR};
pub use error::{ExtractError, ExtractResult, SegmentError, SourceError};
pub use extractor::{Extractor, ExtractorBuilder};
pub use outcome::{SegmentFailure, SegmentOutput, SegmentStage};
pub use report::{BatchReport, BatchSummary, FailureRecord, SegmentOutcome};
pub use source::{InMemorySource, MeshSource, ObjDirectorySource};
