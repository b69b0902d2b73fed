//! Segment identifiers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of one segmented object in the volume.
///
/// Segment ids are opaque unsigned integers assigned by the segmentation.
/// `Display` prints the bare integer so it can be used directly in file
/// stems (`seg_<id>`) and material names.
///
/// # Example
///
/// ```
/// use mesh_types::SegmentId;
///
/// let id = SegmentId::new(864691135);
/// assert_eq!(id.to_string(), "864691135");
/// assert_eq!("42".parse::<SegmentId>().ok(), Some(SegmentId::new(42)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SegmentId(pub u64);

impl SegmentId {
    /// Wrap a raw segment id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SegmentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for SegmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
