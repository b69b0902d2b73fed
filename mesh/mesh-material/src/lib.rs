//! Per-segment colors and materials.
//!
//! Every exported segment gets one flat color. The color comes from a
//! caller-supplied [`ColorMap`]; segments missing from the map are white.
//! The resolved color is used twice:
//!
//! - broadcast onto every vertex of the segment's mesh ([`paint_vertices`])
//! - as the ambient and diffuse term of a [`Material`] written next to the
//!   mesh
//!
//! Building the color map (palettes, per-class coloring, ...) is out of
//! scope; this crate only consumes one.
//!
//! # Example
//!
//! ```
//! use mesh_material::{assign_material, ColorMap};
//! use mesh_types::{Rgb, SegmentId};
//!
//! let mut colors = ColorMap::new();
//! colors.insert(SegmentId::new(1), Rgb::new(1.0, 0.0, 0.0));
//!
//! let red = assign_material(SegmentId::new(1), &colors);
//! assert_eq!(red.diffuse, Rgb::new(1.0, 0.0, 0.0));
//!
//! let fallback = assign_material(SegmentId::new(2), &colors);
//! assert_eq!(fallback.diffuse, Rgb::WHITE);
//! assert_eq!(fallback.name, "SegmentMaterial_2");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod color_map;
mod error;
mod material;

pub use color_map::ColorMap;
pub use error::{MaterialError, MaterialResult};
pub use material::{assign_material, paint_vertices, Material, DEFAULT_SHININESS};
