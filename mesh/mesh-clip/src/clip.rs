//! Full clip pass: vertex filter followed by face remap.

// Vertex counts don't overflow f64 precision in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::{Aabb, IndexedMesh};
use tracing::{debug, warn};

use crate::error::ClipResult;
use crate::filter::filter_vertices;
use crate::params::ClipParams;
use crate::remap::{pass_through_faces, remap_faces};
use crate::retention::RetentionMap;

/// Result of clipping a mesh.
#[derive(Debug, Clone)]
pub struct ClipOutput {
    /// The compacted mesh. Every face index is below the vertex count. With
    /// bounds enabled the three indices of each face are also distinct;
    /// without bounds faces are exactly the input faces.
    pub mesh: IndexedMesh,

    /// Where each original vertex went.
    pub retention: RetentionMap,

    /// Number of vertices in the input mesh.
    pub original_vertices: usize,

    /// Number of faces in the input mesh.
    pub original_faces: usize,

    /// Faces dropped because a vertex was clipped away.
    pub faces_dropped_outside: usize,

    /// Faces dropped because they did not have three distinct vertices.
    pub faces_dropped_degenerate: usize,
}

impl ClipOutput {
    /// Number of vertices kept.
    #[must_use]
    pub fn kept_vertices(&self) -> usize {
        self.mesh.vertices.len()
    }

    /// Number of faces kept.
    #[must_use]
    pub fn kept_faces(&self) -> usize {
        self.mesh.faces.len()
    }

    /// Whether the box kept no vertex at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.vertices.is_empty()
    }

    /// Fraction of input vertices that survived (1.0 for an empty input).
    #[must_use]
    pub fn vertex_retention_ratio(&self) -> f64 {
        if self.original_vertices == 0 {
            1.0
        } else {
            self.kept_vertices() as f64 / self.original_vertices as f64
        }
    }
}

impl std::fmt::Display for ClipOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Clip: {} → {} vertices ({:.1}% kept), {} → {} faces",
            self.original_vertices,
            self.kept_vertices(),
            self.vertex_retention_ratio() * 100.0,
            self.original_faces,
            self.kept_faces()
        )
    }
}

/// Clip a mesh to the box in `params` and compact it.
///
/// Vertices are tested on their original coordinates, translated by
/// `-params.offset` if kept, then faces are rewritten through the resulting
/// [`RetentionMap`]. See [`filter_vertices`] and [`crate::remap_faces`].
/// With bounds disabled faces go through [`crate::pass_through_faces`]
/// instead, so the face list comes out exactly as it went in.
///
/// Keeping zero vertices is not an error; the output mesh is simply empty.
///
/// # Errors
///
/// Returns a [`crate::ClipError`] if the input mesh is malformed (a face
/// index past the vertex list, or more vertices than `u32` can index).
///
/// # Example
///
/// ```
/// use mesh_clip::{clip_mesh, ClipParams};
/// use mesh_types::{Aabb, IndexedMesh};
///
/// let positions = [0.0, 0.0, 0.0, 5.0, 5.0, 5.0, 10.0, 10.0, 10.0];
/// let mesh = IndexedMesh::from_flat(&positions, &[0, 1, 2]).unwrap();
///
/// let params = ClipParams::bounded(Aabb::from_arrays([0.0; 3], [10.0; 3]));
/// let out = clip_mesh(&mesh, &params).unwrap();
/// assert_eq!(out.mesh, mesh);
/// ```
pub fn clip_mesh(mesh: &IndexedMesh, params: &ClipParams) -> ClipResult<ClipOutput> {
    if let Some(bounds) = params.bounds.filter(Aabb::is_inverted) {
        debug!(
            min = ?bounds.min,
            max = ?bounds.max,
            "Clipping box is inverted, no vertex can be kept"
        );
    }

    let (vertices, retention) = filter_vertices(&mesh.vertices, params)?;
    let remapped = if params.use_bounds() {
        remap_faces(&mesh.faces, &retention)?
    } else {
        pass_through_faces(&mesh.faces, retention.len())?
    };

    let output = ClipOutput {
        mesh: IndexedMesh::from_parts(vertices, remapped.faces),
        retention,
        original_vertices: mesh.vertices.len(),
        original_faces: mesh.faces.len(),
        faces_dropped_outside: remapped.dropped_outside,
        faces_dropped_degenerate: remapped.dropped_degenerate,
    };

    debug!(
        vertices_in = output.original_vertices,
        vertices_kept = output.kept_vertices(),
        faces_in = output.original_faces,
        faces_kept = output.kept_faces(),
        dropped_outside = output.faces_dropped_outside,
        dropped_degenerate = output.faces_dropped_degenerate,
        "Clipped mesh"
    );

    if output.faces_dropped_degenerate > 0 {
        warn!(
            "Dropped {} degenerate faces from input mesh",
            output.faces_dropped_degenerate
        );
    }
    if output.is_empty() && output.original_vertices > 0 {
        warn!(
            vertices_in = output.original_vertices,
            "Clipping box kept no vertices"
        );
    }

    Ok(output)
}
