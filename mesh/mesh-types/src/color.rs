//! Floating point RGB color.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with `f64` components in `[0, 1]`.
///
/// Serializes as a plain `[r, g, b]` array when the `serde` feature is on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Rgb {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Rgb {
    /// Create a color, clamping each component into `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Rgb;
    ///
    /// let c = Rgb::new(1.5, 0.25, -1.0);
    /// assert_eq!(c, Rgb::new(1.0, 0.25, 0.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit channels.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Rgb;
    ///
    /// let c = Rgb::from_u8(255, 0, 51);
    /// assert!((c.r - 1.0).abs() < 1e-12);
    /// assert!((c.b - 0.2).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque white `(1, 1, 1)`.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Black `(0, 0, 0)`.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}
