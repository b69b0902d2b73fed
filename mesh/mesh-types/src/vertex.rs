//! Vertex type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Rgb;

/// A vertex in 3D space with an optional color.
///
/// Raw meshes coming out of a mesh source carry positions only. The color
/// is filled in when a segment's material color is broadcast onto its
/// vertices just before export.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Rgb, Vertex};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
/// assert_eq!(v1.position, v2.position);
///
/// let painted = Vertex::with_color(v1.position, Rgb::WHITE);
/// assert_eq!(painted.color, Some(Rgb::WHITE));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Per-vertex color, if assigned.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<Rgb>,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            color: None,
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with position and color.
    #[inline]
    #[must_use]
    pub const fn with_color(position: Point3<f64>, color: Rgb) -> Self {
        Self {
            position,
            color: Some(color),
        }
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}
