// SPDX-License-Identifier: MIT
//
// HSL conversion — the space the ramp arithmetic lives in.
//
// Conversion pipeline:
//
//   hex string ↔ Rgb (8-bit) ↔ Hsl (integer degrees / percent)
//
// Both directions round exactly once, here, so the ramp engine can do all
// of its offset math on small integers and never revisit floating point.

use crate::{ColorError, Rgb};

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space — hue in degrees, saturation and lightness in percent.
///
/// Values are integers: `h` in `0..=360`, `s` and `l` in `0..=100`. An `Hsl`
/// is an immutable value produced by [`Hsl::from_hex`] (or [`Rgb::to_hsl`]);
/// the ramp engine derives every token from these three integers.
///
/// # Examples
///
/// ```
/// use tonal_color::Hsl;
///
/// let red = Hsl::from_hex("#ff0000")?;
/// assert_eq!(red, Hsl::new(0, 100, 50));
/// # Ok::<(), tonal_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue angle in degrees, 0–360.
    pub h: u16,

    /// Saturation in percent, 0–100.
    pub s: u8,

    /// Lightness in percent, 0–100.
    pub l: u8,
}

impl Hsl {
    /// Create a color from HSL values.
    #[inline]
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Parse a six-digit hex color and convert it to HSL.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidFormat`] if the input is not exactly six hex
    /// digits with an optional `#` prefix.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(Rgb::from_hex(hex)?.to_hsl())
    }

    /// Whether this color is a pure gray (zero saturation).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.s == 0
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Standard chroma/sector conversion: the hue circle splits into six
    /// 60° sectors, each mixing the two dominant channels. A hue of 360
    /// lands in the last sector and produces the same color as hue 0.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = f64::from(self.h) / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = if sector < 1.0 {
            (c, x, 0.0)
        } else if sector < 2.0 {
            (x, c, 0.0)
        } else if sector < 3.0 {
            (0.0, c, x)
        } else if sector < 4.0 {
            (0.0, x, c)
        } else if sector < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let m = l - c / 2.0;
        Rgb::from_unit(r + m, g + m, b + m)
    }
}

impl Rgb {
    /// Convert to HSL, rounding each component to its integer form.
    ///
    /// The hue branch is selected by ordered equality checks against the
    /// channel maximum — red first, then green, then blue — so ties between
    /// channels resolve deterministically toward the earlier branch. The
    /// comparisons are exact: every channel is an integer divided by 255,
    /// so equal channels compare equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Achromatic: hue is undefined, reported as 0.
        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            let h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };

            (h, s)
        };

        Hsl {
            h: round_degrees(h * 360.0),
            s: round_percent(s * 100.0),
            l: round_percent(l * 100.0),
        }
    }
}

// The math above guarantees non-negative in-range values, so the casts
// cannot truncate or lose sign.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_degrees(v: f64) -> u16 {
    v.round() as u16
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(v: f64) -> u8 {
    v.round() as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
