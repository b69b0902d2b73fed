//! Vertex classification against the clipping box.

use mesh_types::Vertex;

use crate::error::{ClipError, ClipResult};
use crate::params::ClipParams;
use crate::retention::RetentionMap;

/// Classify vertices against the clipping box and compact the survivors.
///
/// Runs a single pass in original order. A vertex is kept when
/// [`ClipParams::keeps`] accepts its *original* position; kept vertices are
/// then translated by `-params.offset` and appended to the output. With
/// bounds disabled the returned map is the identity.
///
/// An empty vertex slice gives an empty output and an empty map.
///
/// # Errors
///
/// Returns [`ClipError::TooManyVertices`] if the mesh cannot be indexed by
/// `u32` faces.
///
/// # Example
///
/// ```
/// use mesh_clip::{filter_vertices, ClipParams};
/// use mesh_types::{Aabb, Vector3, Vertex};
///
/// let vertices = vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(5.0, 5.0, 5.0),
///     Vertex::from_coords(10.0, 10.0, 10.0),
/// ];
/// let params = ClipParams::bounded(Aabb::from_arrays([0.0; 3], [6.0; 3]))
///     .with_offset(Vector3::new(1.0, 1.0, 1.0));
///
/// let (kept, map) = filter_vertices(&vertices, &params).unwrap();
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[1].position.x, 4.0);
/// assert!(!map.is_kept(2));
/// ```
pub fn filter_vertices(
    vertices: &[Vertex],
    params: &ClipParams,
) -> ClipResult<(Vec<Vertex>, RetentionMap)> {
    if !params.use_bounds() {
        let map = RetentionMap::identity(vertices.len())?;
        let kept = vertices
            .iter()
            .map(|v| Vertex {
                position: v.position - params.offset,
                color: v.color,
            })
            .collect();
        return Ok((kept, map));
    }

    if u32::try_from(vertices.len()).is_err() {
        return Err(ClipError::TooManyVertices {
            vertex_count: vertices.len(),
        });
    }

    let mut kept = Vec::new();
    let mut map = RetentionMap::with_capacity(vertices.len());

    for vertex in vertices {
        if params.keeps(&vertex.position) {
            map.keep();
            kept.push(Vertex {
                position: vertex.position - params.offset,
                color: vertex.color,
            });
        } else {
            map.drop_vertex();
        }
    }

    Ok((kept, map))
}
