//! Segment to color lookup.

use std::path::Path;

use hashbrown::HashMap;
use mesh_types::{Rgb, SegmentId};
use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};

/// Mapping from segment id to display color.
///
/// Read-only from the pipeline's point of view. Serializes as a JSON object
/// keyed by the decimal segment id:
///
/// ```json
/// { "864691135": [1.0, 0.5, 0.0], "42": [0.2, 0.2, 1.0] }
/// ```
///
/// # Example
///
/// ```
/// use mesh_material::ColorMap;
/// use mesh_types::{Rgb, SegmentId};
///
/// let colors = ColorMap::from_json_str(r#"{ "7": [0.0, 1.0, 0.0] }"#).unwrap();
/// assert_eq!(colors.lookup(SegmentId::new(7)), Some(Rgb::new(0.0, 1.0, 0.0)));
/// assert_eq!(colors.lookup(SegmentId::new(8)), None);
/// assert_eq!(colors.resolve(SegmentId::new(8)), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap {
    colors: HashMap<SegmentId, Rgb>,
}

impl ColorMap {
    /// Create an empty color map. Every lookup falls back to white.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color for a segment, returning the previous one.
    pub fn insert(&mut self, id: SegmentId, color: Rgb) -> Option<Rgb> {
        self.colors.insert(id, color)
    }

    /// Color for a segment, if the map has one.
    #[must_use]
    pub fn lookup(&self, id: SegmentId) -> Option<Rgb> {
        self.colors.get(&id).copied()
    }

    /// Color for a segment, falling back to [`Rgb::WHITE`].
    #[must_use]
    pub fn resolve(&self, id: SegmentId) -> Rgb {
        self.lookup(id).unwrap_or(Rgb::WHITE)
    }

    /// Number of segments with an explicit color.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no segment has an explicit color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over `(segment, color)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, Rgb)> + '_ {
        self.colors.iter().map(|(&id, &c)| (id, c))
    }

    /// Parse a color map from JSON.
    ///
    /// Components outside `[0, 1]` are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Parse`] if the JSON is malformed or a key is
    /// not an unsigned integer.
    pub fn from_json_str(json: &str) -> MaterialResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a color map from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Io`] if the file cannot be read, or
    /// [`MaterialError::Parse`] if its content is invalid.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> MaterialResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MaterialError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), entries = map.len(), "Loaded color map");
        Ok(map)
    }
}

impl FromIterator<(SegmentId, Rgb)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (SegmentId, Rgb)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl Extend<(SegmentId, Rgb)> for ColorMap {
    fn extend<I: IntoIterator<Item = (SegmentId, Rgb)>>(&mut self, iter: I) {
        self.colors.extend(iter);
    }
}
