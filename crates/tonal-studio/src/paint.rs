//! Paint fills — the color payload of a style.
//!
//! Mirrors the fill model of design documents: a style carries a paint,
//! and only a solid paint counts as a "flat" fill when seed colors are
//! read back. Channels are stored as fractions in `[0.0, 1.0]`, the way
//! documents store them; scaling to 8-bit hex happens only at the seed
//! boundary.

use tonal_color::{Hsl, Rgb};

// ---------------------------------------------------------------------------
// SolidColor
// ---------------------------------------------------------------------------

/// A solid color with fractional channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    /// Red channel fraction.
    pub r: f64,
    /// Green channel fraction.
    pub g: f64,
    /// Blue channel fraction.
    pub b: f64,
}

impl SolidColor {
    /// Pure black — the fallback for anything that has no flat fill.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from channel fractions.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string (channels scaled and rounded).
    #[must_use]
    pub fn to_hex(self) -> String {
        Rgb::from_unit(self.r, self.g, self.b).to_hex()
    }
}

/// One stop of a gradient fill.
///
/// Gradients are modeled only far enough to be recognizably not-flat:
/// the seed reader needs to tell them apart from solid fills, nothing more.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis, 0.0–1.0.
    pub position: f64,
    /// Color at this stop.
    pub color: SolidColor,
}

// ---------------------------------------------------------------------------
// Paint
// ---------------------------------------------------------------------------

/// A paint: the fill of a style.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A single flat color with an opacity.
    Solid {
        /// The fill color.
        color: SolidColor,
        /// Opacity, 0.0–1.0.
        opacity: f64,
    },

    /// A gradient. Never a seed source — the seed reader reports black
    /// for styles filled with one.
    Gradient {
        /// Stops in axis order.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Build a solid paint from an `hsla(h, s%, l%, a)` color string — the
    /// strings the ramp generator emits. This is the document-host step of
    /// turning a CSS color into a flat fill.
    ///
    /// Returns `None` for anything that is not an `hsla()` string with
    /// in-range components.
    #[must_use]
    pub fn solid_from_css(css: &str) -> Option<Self> {
        let body = css.trim().strip_prefix("hsla(")?.strip_suffix(')')?;
        let mut parts = body.split(',').map(str::trim);

        let h: u16 = parts.next()?.parse().ok()?;
        let s: u8 = parts.next()?.strip_suffix('%')?.parse().ok()?;
        let l: u8 = parts.next()?.strip_suffix('%')?.parse().ok()?;
        let a: f64 = parts.next()?.parse().ok()?;

        if parts.next().is_some() || h > 360 || s > 100 || l > 100 || !(0.0..=1.0).contains(&a) {
            return None;
        }

        let rgb = Hsl::new(h, s, l).to_rgb();
        Some(Self::Solid {
            color: SolidColor::new(
                f64::from(rgb.r) / 255.0,
                f64::from(rgb.g) / 255.0,
                f64::from(rgb.b) / 255.0,
            ),
            opacity: a,
        })
    }

    /// The flat color of this paint, if it is solid.
    #[must_use]
    pub const fn as_solid(&self) -> Option<SolidColor> {
        match self {
            Self::Solid { color, .. } => Some(*color),
            Self::Gradient { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
