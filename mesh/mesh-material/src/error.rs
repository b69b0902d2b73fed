//! Error types for color map loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur while loading a color map.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// The color map file could not be read.
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The color map is not valid JSON of the expected shape.
    #[error("invalid color map: {0}")]
    Parse(#[from] serde_json::Error),
}
