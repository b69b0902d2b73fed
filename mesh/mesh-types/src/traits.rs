//! Traits for mesh access.

use crate::Vertex;

/// Read access to mesh topology.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangle faces.
    fn face_count(&self) -> usize;

    /// Get a vertex by index.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a face by index.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Whether the mesh has no faces.
    ///
    /// A mesh with vertices but no faces still counts as empty: there is
    /// no surface to render.
    fn is_empty(&self) -> bool {
        self.face_count() == 0
    }
}

