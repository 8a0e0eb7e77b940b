// SPDX-License-Identifier: MIT
//
// tonal-color — Color primitives for tonal.
//
// The parsing and conversion layer everything else builds on: six-digit
// hex strings in, integer HSL out, and back again. The ramp engine does
// all of its arithmetic on the integer HSL values this crate produces,
// so rounding happens exactly once, at the parse boundary.
//
// This crate intentionally avoids external color crates (palette, csscolorparser)
// in favor of the two conversions the ramp actually needs, written out in
// full. The hue math is small enough that owning it outright is cheaper
// than auditing someone else's gamut behavior.

// Single-character variable names (r, g, b, h, s, l, d) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

use thiserror::Error;

pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;

/// Errors produced when decoding color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not exactly six hex digits (with optional `#` prefix).
    ///
    /// There is no partial parsing: three-digit shorthand, eight-digit
    /// alpha forms, and anything non-hex all land here.
    #[error("invalid hex color `{0}`: expected six hex digits, optionally prefixed with `#`")]
    InvalidFormat(String),
}
