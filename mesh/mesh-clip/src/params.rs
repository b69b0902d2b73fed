//! Parameters for mesh clipping.

use mesh_types::{Aabb, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for clipping a mesh to a box.
///
/// `bounds == None` disables the box test: every vertex is kept and only
/// the offset is applied.
///
/// # Example
///
/// ```
/// use mesh_clip::ClipParams;
/// use mesh_types::{Aabb, Vector3};
///
/// let params = ClipParams::default()
///     .with_bounds(Aabb::from_arrays([0.0, 0.0, 0.0], [100.0, 100.0, 40.0]))
///     .with_offset(Vector3::new(0.0, 0.0, 20.0));
///
/// assert!(params.use_bounds());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClipParams {
    /// Box that vertices must lie in (inclusive), tested on original
    /// coordinates. `None` keeps every vertex.
    pub bounds: Option<Aabb>,

    /// Translation subtracted from every kept vertex after the box test.
    /// Default: zero.
    pub offset: Vector3<f64>,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            bounds: None,
            offset: Vector3::zeros(),
        }
    }
}

impl ClipParams {
    /// Create params that clip to the given box with no offset.
    #[must_use]
    pub fn bounded(bounds: Aabb) -> Self {
        Self {
            bounds: Some(bounds),
            ..Default::default()
        }
    }

    /// Whether the box test is enabled.
    #[inline]
    #[must_use]
    pub const fn use_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    /// Set the clipping box.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Disable the box test.
    #[must_use]
    pub const fn without_bounds(mut self) -> Self {
        self.bounds = None;
        self
    }

    /// Set the offset subtracted from kept vertices.
    #[must_use]
    pub const fn with_offset(mut self, offset: Vector3<f64>) -> Self {
        self.offset = offset;
        self
    }

    /// Whether a vertex at `position` survives the box test.
    #[inline]
    #[must_use]
    pub fn keeps(&self, position: &Point3<f64>) -> bool {
        self.bounds.as_ref().map_or(true, |b| b.contains(position))
    }
}
