//! Material records for exported segments.

use mesh_types::{IndexedMesh, Rgb, SegmentId};

use crate::color_map::ColorMap;

/// Specular exponent written for every segment material.
pub const DEFAULT_SHININESS: f64 = 1000.0;

/// Shading description of one segment.
///
/// Ambient and diffuse carry the segment color; specular is full white and
/// the shininess is fixed. These are cosmetic defaults for viewers, not
/// values derived from the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name, `SegmentMaterial_<id>`.
    pub name: String,
    /// Segment this material belongs to.
    pub segment: SegmentId,
    /// Ambient color (`Ka`).
    pub ambient: Rgb,
    /// Diffuse color (`Kd`).
    pub diffuse: Rgb,
    /// Specular color (`Ks`).
    pub specular: Rgb,
    /// Specular exponent (`Ns`).
    pub shininess: f64,
}

impl Material {
    /// Material for `segment` with the given flat color.
    #[must_use]
    pub fn flat(segment: SegmentId, color: Rgb) -> Self {
        Self {
            name: format!("SegmentMaterial_{segment}"),
            segment,
            ambient: color,
            diffuse: color,
            specular: Rgb::WHITE,
            shininess: DEFAULT_SHININESS,
        }
    }
}

/// Resolve the color for `segment` and build its material.
///
/// Segments missing from `colors` get white.
#[must_use]
pub fn assign_material(segment: SegmentId, colors: &ColorMap) -> Material {
    let color = colors.lookup(segment).unwrap_or_else(|| {
        tracing::debug!(%segment, "No color for segment, using white");
        Rgb::WHITE
    });
    Material::flat(segment, color)
}

/// Broadcast the material's diffuse color onto every vertex of `mesh`.
pub fn paint_vertices(mesh: &mut IndexedMesh, material: &Material) {
    mesh.paint(material.diffuse);
}
