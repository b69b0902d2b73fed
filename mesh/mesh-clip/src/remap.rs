//! Face rewriting through a retention map.

use crate::error::{ClipError, ClipResult};
use crate::retention::RetentionMap;

/// Faces rewritten into the clipped mesh's index space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemappedFaces {
    /// Surviving faces, in input order, with new indices.
    pub faces: Vec<[u32; 3]>,

    /// Faces dropped because at least one vertex was clipped away.
    pub dropped_outside: usize,

    /// Faces dropped because their three indices were not distinct.
    pub dropped_degenerate: usize,
}

/// Rewrite faces through `map`, dropping any face that lost a vertex.
///
/// This is the bounded path. A face survives iff all three of its vertices
/// were kept; it keeps its original vertex order (no winding correction).
/// Faces whose indices are not pairwise distinct are dropped as degenerate.
/// Output order matches input order.
///
/// # Errors
///
/// Returns [`ClipError::IndexOutOfRange`] if a face references a vertex the
/// map does not cover.
///
/// # Example
///
/// ```
/// use mesh_clip::{remap_faces, RetentionMap};
///
/// let mut map = RetentionMap::default();
/// map.keep();
/// map.drop_vertex();
/// map.keep();
/// map.keep();
///
/// let remapped = remap_faces(&[[0, 2, 3], [0, 1, 2]], &map).unwrap();
/// assert_eq!(remapped.faces, vec![[0, 1, 2]]);
/// assert_eq!(remapped.dropped_outside, 1);
/// ```
pub fn remap_faces(faces: &[[u32; 3]], map: &RetentionMap) -> ClipResult<RemappedFaces> {
    let mut out = RemappedFaces {
        faces: Vec::with_capacity(faces.len()),
        ..RemappedFaces::default()
    };

    for (face_index, &face) in faces.iter().enumerate() {
        check_range(face_index, face, map.len())?;

        let [a, b, c] = face;
        if a == b || b == c || a == c {
            out.dropped_degenerate += 1;
            continue;
        }

        match map.remap_face(face) {
            Some(remapped) => out.faces.push(remapped),
            None => out.dropped_outside += 1,
        }
    }

    Ok(out)
}

/// Copy faces unchanged, the unbounded counterpart of [`remap_faces`].
///
/// Every face is kept as given, repeated indices included. Only the index
/// range is checked against `vertex_count`.
///
/// # Errors
///
/// Returns [`ClipError::IndexOutOfRange`] if a face references a vertex at
/// or past `vertex_count`.
///
/// # Example
///
/// ```
/// use mesh_clip::pass_through_faces;
///
/// let faces = [[0, 1, 2], [0, 0, 1]];
/// let passed = pass_through_faces(&faces, 3).unwrap();
/// assert_eq!(passed.faces, faces.to_vec());
/// assert_eq!(passed.dropped_degenerate, 0);
///
/// assert!(pass_through_faces(&faces, 2).is_err());
/// ```
pub fn pass_through_faces(faces: &[[u32; 3]], vertex_count: usize) -> ClipResult<RemappedFaces> {
    for (face_index, &face) in faces.iter().enumerate() {
        check_range(face_index, face, vertex_count)?;
    }

    Ok(RemappedFaces {
        faces: faces.to_vec(),
        ..RemappedFaces::default()
    })
}

fn check_range(face_index: usize, face: [u32; 3], vertex_count: usize) -> ClipResult<()> {
    match face.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(ClipError::IndexOutOfRange {
            face: face_index,
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}
