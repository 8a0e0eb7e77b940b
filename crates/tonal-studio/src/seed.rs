//! Startup seed colors — what the editing surface starts from.
//!
//! On startup the host reads three conventionally named styles and reports
//! their current colors as hex strings, giving the surface its initial
//! editable values. A style that is missing, unpainted, or filled with a
//! gradient reports black — the surface always receives three colors.

use crate::paint::SolidColor;
use crate::store::MemoryStyleStore;

/// The three conventional seed style names, in reporting order.
pub const SEED_STYLES: [&str; 3] = ["primary", "accent", "cover"];

/// The current editable seed colors, as lowercase `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedColors {
    /// Color of the `primary` style.
    pub primary: String,
    /// Color of the `accent` style.
    pub accent: String,
    /// Color of the `cover` style.
    pub cover: String,
}

/// Read the seed colors from a document.
#[must_use]
pub fn seed_colors(store: &MemoryStyleStore) -> SeedColors {
    let [primary, accent, cover] = SEED_STYLES.map(|name| {
        store
            .flat_fill(name)
            .unwrap_or(SolidColor::BLACK)
            .to_hex()
    });

    SeedColors {
        primary,
        accent,
        cover,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
