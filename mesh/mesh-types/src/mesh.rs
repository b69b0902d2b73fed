//! Indexed triangle mesh.

use crate::{MeshTopology, Rgb, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by 0-based index. This is both the raw form handed out by a mesh source
/// and the compact form produced by clipping.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions and optional color
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, MeshTopology, Rgb, Vertex};
///
/// let corners = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 4.0, 0.0], [0.0, 4.0, 0.0]];
/// let mut mesh = IndexedMesh::from_parts(
///     corners.into_iter().map(Vertex::from).collect(),
///     vec![[0, 1, 2], [0, 2, 3]],
/// );
/// mesh.paint(Rgb::new(0.0, 0.6, 1.0));
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face(1), Some([0, 2, 3]));
/// assert!(mesh.vertices.iter().all(|v| v.color.is_some()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from flat coordinate and index arrays.
    ///
    /// This is the shape most segmentation mesh services hand out.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat array `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array `[a0, b0, c0, a1, b1, c1, ...]`
    ///
    /// Returns `None` if either length is not a multiple of 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 5.0, 5.0, 5.0, 10.0, 10.0, 10.0];
    /// let mesh = IndexedMesh::from_flat(&positions, &[0, 1, 2]).unwrap();
    /// assert_eq!(mesh.vertex_count(), 3);
    ///
    /// assert!(IndexedMesh::from_flat(&[0.0, 1.0], &[]).is_none());
    /// ```
    #[must_use]
    pub fn from_flat(positions: &[f64], indices: &[u32]) -> Option<Self> {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return None;
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();
        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Some(Self { vertices, faces })
    }

    /// Assign the same color to every vertex.
    pub fn paint(&mut self, color: Rgb) {
        for vertex in &mut self.vertices {
            vertex.color = Some(color);
        }
    }

    /// Index of the first face referencing a vertex that does not exist.
    #[must_use]
    pub fn first_dangling_face(&self) -> Option<usize> {
        let n = self.vertices.len();
        self.faces
            .iter()
            .position(|f| f.iter().any(|&i| i as usize >= n))
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }
}
