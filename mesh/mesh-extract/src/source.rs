//! Where raw segment meshes come from.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use mesh_io::{load_obj, IoError};
use mesh_types::{IndexedMesh, SegmentId};

use crate::error::SourceError;

/// Provider of raw segment meshes.
///
/// Implementations must be shareable across worker threads; the extractor
/// may call [`fetch_mesh`](MeshSource::fetch_mesh) concurrently for distinct
/// ids in parallel mode.
///
/// Any `Fn(SegmentId) -> Result<IndexedMesh, SourceError>` closure is a
/// source:
///
/// ```
/// use mesh_extract::{MeshSource, SourceError};
/// use mesh_types::{IndexedMesh, SegmentId};
///
/// let source = |id: SegmentId| -> Result<IndexedMesh, SourceError> {
///     Err(SourceError::NotFound { id })
/// };
/// assert!(source.fetch_mesh(SegmentId::new(1)).is_err());
/// ```
pub trait MeshSource: Send + Sync {
    /// Fetch the full-resolution mesh for `id`.
    ///
    /// # Errors
    ///
    /// [`SourceError::NotFound`] if the source has no such segment,
    /// [`SourceError::Transient`] for any other retrieval failure.
    fn fetch_mesh(&self, id: SegmentId) -> Result<IndexedMesh, SourceError>;
}

impl<F> MeshSource for F
where
    F: Fn(SegmentId) -> Result<IndexedMesh, SourceError> + Send + Sync,
{
    fn fetch_mesh(&self, id: SegmentId) -> Result<IndexedMesh, SourceError> {
        self(id)
    }
}

/// Meshes held in memory, keyed by segment id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    meshes: HashMap<SegmentId, IndexedMesh>,
}

impl InMemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the mesh for `id`.
    pub fn insert(&mut self, id: SegmentId, mesh: IndexedMesh) -> Option<IndexedMesh> {
        self.meshes.insert(id, mesh)
    }

    /// Number of meshes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the source holds no meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl FromIterator<(SegmentId, IndexedMesh)> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = (SegmentId, IndexedMesh)>>(iter: I) -> Self {
        Self {
            meshes: iter.into_iter().collect(),
        }
    }
}

impl MeshSource for InMemorySource {
    fn fetch_mesh(&self, id: SegmentId) -> Result<IndexedMesh, SourceError> {
        self.meshes
            .get(&id)
            .cloned()
            .ok_or(SourceError::NotFound { id })
    }
}

/// Raw meshes stored as `<dir>/<id>.obj`.
#[derive(Debug, Clone)]
pub struct ObjDirectorySource {
    dir: PathBuf,
}

impl ObjDirectorySource {
    /// Read meshes from `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory meshes are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the mesh for `id` is read from.
    #[must_use]
    pub fn path_for(&self, id: SegmentId) -> PathBuf {
        self.dir.join(format!("{id}.obj"))
    }
}

impl MeshSource for ObjDirectorySource {
    fn fetch_mesh(&self, id: SegmentId) -> Result<IndexedMesh, SourceError> {
        load_obj(self.path_for(id)).map_err(|e| match e {
            IoError::FileNotFound { .. } => SourceError::NotFound { id },
            other => SourceError::Transient {
                id,
                message: other.to_string(),
            },
        })
    }
}
