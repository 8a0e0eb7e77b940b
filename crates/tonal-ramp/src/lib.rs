//! # tonal-ramp — tonal palette engine
//!
//! Fans one seed color out into a complete set of named color tokens:
//! the seed itself, eleven lightness steps, and four alpha variants.
//! One input shift produces an entirely new ramp that stays visually
//! balanced whether the seed is near-black, mid-tone, or near-white.
//!
//! # Architecture
//!
//! ```text
//! seed hex + prefix
//!     │
//!     ▼
//! tonal-color:  parse + integer HSL conversion
//!     │
//!     ▼
//! ramp.rs:      tone bucket → shared offsets → per-step derivation
//!     │
//!     ▼
//! palette.rs:   ordered token → color-string mapping
//! ```
//!
//! Generation is deterministic and pure: the same `(seed, prefix)` pair
//! always produces a byte-identical palette, and nothing outside the
//! returned value is touched (a `tracing` debug event aside).

pub mod palette;
pub mod ramp;

pub use palette::Palette;
pub use ramp::{generate, tone_bucket};
