//! Error types for segment extraction.
//!
//! Two levels: [`ExtractError`] aborts a whole batch before any segment is
//! touched, [`SegmentError`] is recorded against one segment and the batch
//! moves on.

use std::path::PathBuf;

use mesh_clip::ClipError;
use mesh_io::IoError;
use mesh_types::SegmentId;
use thiserror::Error;

/// Result type for batch-level operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Fatal, batch-level errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No segment ids were given.
    #[error("no segment ids to extract")]
    EmptyBatch,

    /// The extractor was built without a mesh source.
    #[error("no mesh source configured")]
    MissingSource,

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool for parallel mode could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A configuration file could not be read.
    #[error("I/O error at '{path}': {source}")]
    ConfigIo {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON of the expected shape.
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Failure reported by a [`crate::MeshSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source has no mesh for this segment.
    #[error("no mesh for segment {id}")]
    NotFound {
        /// The requested segment.
        id: SegmentId,
    },

    /// The mesh exists but could not be retrieved this time.
    #[error("fetching segment {id} failed: {message}")]
    Transient {
        /// The requested segment.
        id: SegmentId,
        /// What went wrong.
        message: String,
    },
}

/// Why one segment could not be exported.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The raw mesh could not be fetched.
    #[error(transparent)]
    Fetch(#[from] SourceError),

    /// The raw mesh is malformed.
    #[error("malformed mesh: {0}")]
    Clip(#[from] ClipError),

    /// The output files could not be written.
    #[error("write failed: {0}")]
    Write(#[from] IoError),
}
