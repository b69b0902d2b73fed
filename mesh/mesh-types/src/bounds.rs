//! Axis-aligned bounding box.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned box given by its minimum and maximum corners.
///
/// Containment is inclusive on every face.
///
/// The corners are stored exactly as given. A box with `min > max` on any
/// axis is *inverted*: it contains no point, so clipping against it keeps
/// nothing. Ordering the corners is the caller's responsibility.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(6.0, 6.0, 6.0),
/// );
///
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// assert!(aabb.contains(&Point3::new(6.0, 0.0, 6.0))); // boundary
/// assert!(!aabb.contains(&Point3::new(10.0, 10.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are not reordered; see [`Aabb::is_inverted`].
    #[inline]
    #[must_use]
    pub const fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Create an AABB from raw corner coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let aabb = Aabb::from_arrays([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]);
    /// assert_eq!(aabb.max, Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(min: [f64; 3], max: [f64; 3]) -> Self {
        Self {
            min: Point3::new(min[0], min[1], min[2]),
            max: Point3::new(max[0], max[1], max[2]),
        }
    }

    /// Check whether `min > max` on any axis.
    ///
    /// An inverted box contains no point.
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Whether `point` lies in the box.
    ///
    /// Points on the boundary are considered inside. Comparisons involving
    /// NaN coordinates are false, so a NaN point is never contained.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_contains_inclusive() {
        let aabb = Aabb::from_arrays([0.0, 0.0, 0.0], [6.0, 6.0, 6.0]);

        assert!(aabb.contains(&Point3::origin()));
        assert!(aabb.contains(&Point3::new(6.0, 6.0, 6.0)));
        assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
        assert!(!aabb.contains(&Point3::new(10.0, 10.0, 10.0)));
        assert!(!aabb.contains(&Point3::new(-0.5, 3.0, 3.0)));
        assert!(!aabb.contains(&Point3::new(3.0, 3.0, 6.000_001)));
    }

    #[test]
    fn aabb_new_keeps_corners_as_given() {
        let aabb = Aabb::new(Point3::new(5.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.is_inverted());
        assert!((aabb.min.x - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_aabb_contains_nothing() {
        let aabb = Aabb::from_arrays([1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
        assert!(!aabb.contains(&Point3::new(0.5, 0.5, 0.5)));
        assert!(!aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn nan_point_is_outside() {
        let aabb = Aabb::from_arrays([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert!(!aabb.contains(&Point3::new(f64::NAN, 0.5, 0.5)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn aabb_serde_roundtrip() {
        let aabb = Aabb::from_arrays([0.0, 1.0, 2.0], [3.0, 4.0, 5.0]);
        let json = serde_json::to_string(&aabb).ok();
        let parsed: Option<Aabb> = json.and_then(|j| serde_json::from_str(&j).ok());
        assert_eq!(parsed, Some(aabb));
    }
}
