//! Error types for clipping operations.

use thiserror::Error;

/// Errors that can occur while clipping a mesh.
///
/// All of them mean the raw mesh handed in was malformed; a mesh that lies
/// completely outside the box is not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClipError {
    /// A face references a vertex index past the end of the vertex list.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    IndexOutOfRange {
        /// Position of the offending face in the input face list.
        face: usize,
        /// The invalid vertex index.
        index: u32,
        /// Number of vertices in the input mesh.
        vertex_count: usize,
    },

    /// The mesh has more vertices than a `u32` face index can address.
    #[error("mesh has {vertex_count} vertices, more than u32 indices can address")]
    TooManyVertices {
        /// Number of vertices in the input mesh.
        vertex_count: usize,
    },
}

/// Result type for clipping operations.
pub type ClipResult<T> = std::result::Result<T, ClipError>;
