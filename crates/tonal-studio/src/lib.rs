//! # tonal-studio — style document layer for tonal
//!
//! This crate contains the document side of palette synchronization:
//!
//! - **[`paint`]** — `Paint` fills and CSS color-string construction
//! - **[`store`]** — the `StyleStore` capability trait and the in-memory
//!   reference document
//! - **[`sync`]** — palette → named-style synchronization
//! - **[`seed`]** — startup seed colors read back from the document
//!
//! The ramp engine produces a pure value; everything stateful lives here,
//! behind the narrow [`StyleStore`] seam, so any document host that can
//! find, create, rename, and repaint named styles can receive a ramp.

pub mod paint;
pub mod seed;
pub mod store;
pub mod sync;

pub use paint::{GradientStop, Paint, SolidColor};
pub use seed::{SEED_STYLES, SeedColors, seed_colors};
pub use store::{MemoryStyleStore, PaintStyle, StyleId, StyleStore};
pub use sync::{sync_palette, sync_swatch};
