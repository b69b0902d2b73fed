//! Kept/dropped table produced by the vertex filter.

use crate::error::{ClipError, ClipResult};

/// For every original vertex, its index in the clipped mesh, if it was kept.
///
/// # Invariant
///
/// Reading the kept slots in original order yields exactly
/// `0, 1, …, kept_count() - 1`: new indices are dense, unique and strictly
/// increasing. The map can only be grown one slot at a time through
/// [`RetentionMap::keep`] and [`RetentionMap::drop_vertex`], or built whole
/// as the identity, so the invariant holds by construction.
///
/// # Example
///
/// ```
/// use mesh_clip::RetentionMap;
///
/// let map = RetentionMap::identity(3).unwrap();
/// assert_eq!(map.new_index(2), Some(2));
/// assert_eq!(map.remap_face([0, 1, 2]), Some([0, 1, 2]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionMap {
    slots: Vec<Option<u32>>,
    kept: u32,
}

impl RetentionMap {
    /// Create an empty map with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            kept: 0,
        }
    }

    /// Map in which all `count` vertices are kept at their own index.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::TooManyVertices`] if `count` does not fit in a
    /// `u32`.
    pub fn identity(count: usize) -> ClipResult<Self> {
        let kept = u32::try_from(count).map_err(|_| ClipError::TooManyVertices {
            vertex_count: count,
        })?;
        Ok(Self {
            slots: (0..kept).map(Some).collect(),
            kept,
        })
    }

    /// Record the next original vertex as kept and return its new index.
    pub fn keep(&mut self) -> u32 {
        let index = self.kept;
        self.slots.push(Some(index));
        self.kept += 1;
        index
    }

    /// Record the next original vertex as dropped.
    pub fn drop_vertex(&mut self) {
        self.slots.push(None);
    }

    /// Number of original vertices covered by the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the map covers no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of kept vertices.
    #[inline]
    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.kept as usize
    }

    /// Number of dropped vertices.
    #[inline]
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.len() - self.kept_count()
    }

    /// New index of original vertex `original`.
    ///
    /// `None` if the vertex was dropped or is past the end of the map.
    #[inline]
    #[must_use]
    pub fn new_index(&self, original: u32) -> Option<u32> {
        self.slots.get(original as usize).copied().flatten()
    }

    /// Whether original vertex `original` was kept.
    #[inline]
    #[must_use]
    pub fn is_kept(&self, original: u32) -> bool {
        self.new_index(original).is_some()
    }

    /// Rewrite a face through the map.
    ///
    /// `None` unless all three vertices were kept.
    #[must_use]
    pub fn remap_face(&self, [a, b, c]: [u32; 3]) -> Option<[u32; 3]> {
        Some([self.new_index(a)?, self.new_index(b)?, self.new_index(c)?])
    }

    /// Slots in original vertex order.
    pub fn iter(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_assigns_dense_indices() {
        let mut map = RetentionMap::with_capacity(4);
        assert_eq!(map.keep(), 0);
        map.drop_vertex();
        assert_eq!(map.keep(), 1);
        map.drop_vertex();

        assert_eq!(map.len(), 4);
        assert_eq!(map.kept_count(), 2);
        assert_eq!(map.dropped_count(), 2);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![Some(0), None, Some(1), None]
        );
    }

    #[test]
    fn new_index_past_end_is_none() {
        let map = RetentionMap::identity(2).unwrap();
        assert_eq!(map.new_index(1), Some(1));
        assert_eq!(map.new_index(2), None);
        assert!(!map.is_kept(99));
    }

    #[test]
    fn remap_face_requires_all_three() {
        let mut map = RetentionMap::default();
        map.keep();
        map.keep();
        map.drop_vertex();
        map.keep();

        assert_eq!(map.remap_face([0, 1, 3]), Some([0, 1, 2]));
        assert_eq!(map.remap_face([3, 0, 1]), Some([2, 0, 1]));
        assert_eq!(map.remap_face([0, 1, 2]), None);
    }

    #[test]
    fn identity_of_zero_is_empty() {
        let map = RetentionMap::identity(0).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.kept_count(), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn identity_past_u32_is_rejected() {
        let count = u32::MAX as usize + 1;
        assert!(matches!(
            RetentionMap::identity(count),
            Err(ClipError::TooManyVertices { vertex_count }) if vertex_count == count
        ));
    }
}
