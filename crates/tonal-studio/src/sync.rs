//! Palette → document synchronization.
//!
//! The ramp engine produces a value; this module applies it. Each token is
//! an independent upsert — find the style by name, create it if absent,
//! then set name and paint. No token depends on another's persisted state,
//! so application order is cosmetic (palette order is used).

use tonal_color::ColorError;
use tonal_ramp::{Palette, generate};
use tracing::info;

use crate::store::StyleStore;

/// Apply every `(name, color)` entry of a palette to the store.
///
/// Existing styles are renamed and repainted in place; missing ones are
/// created first. Re-applying the same palette is idempotent.
pub fn sync_palette<S: StyleStore>(store: &mut S, palette: &Palette) {
    for (name, color) in palette.iter() {
        let handle = store
            .find_style_by_name(name)
            .unwrap_or_else(|| store.create_style());
        store.set_style_name(handle, name);
        store.set_style_paint(handle, color);
    }
}

/// Generate the ramp for one swatch and synchronize it.
///
/// The palette is computed in full before any store mutation, so a
/// malformed seed leaves the document untouched.
///
/// # Errors
///
/// [`ColorError::InvalidFormat`] if `seed` is not a six-digit hex color.
pub fn sync_swatch<S: StyleStore>(
    store: &mut S,
    prefix: &str,
    seed: &str,
) -> Result<Palette, ColorError> {
    let palette = generate(seed, prefix)?;
    sync_palette(store, &palette);
    info!(prefix, seed, tokens = palette.len(), "synchronized swatch");
    Ok(palette)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemoryStyleStore;

    #[test]
    fn sync_creates_one_style_per_token() {
        let mut store = MemoryStyleStore::new();
        sync_swatch(&mut store, "primary", "#0d99ff").unwrap();

        assert_eq!(store.len(), 16);
        let first = store.styles().next().unwrap();
        assert_eq!(first.name(), "primary");
        assert!(first.paint().is_some());
    }

    #[test]
    fn resync_updates_in_place_without_duplicates() {
        let mut store = MemoryStyleStore::new();
        sync_swatch(&mut store, "primary", "#ff0000").unwrap();
        sync_swatch(&mut store, "primary", "#0000ff").unwrap();

        assert_eq!(store.len(), 16);
        let fill = store.flat_fill("primary").unwrap();
        assert_eq!(fill.to_hex(), "#0000ff");
    }

    #[test]
    fn distinct_prefixes_do_not_collide() {
        let mut store = MemoryStyleStore::new();
        sync_swatch(&mut store, "primary", "#ff0000").unwrap();
        sync_swatch(&mut store, "accent", "#00ff00").unwrap();

        assert_eq!(store.len(), 32);
        assert_eq!(store.flat_fill("primary").unwrap().to_hex(), "#ff0000");
        assert_eq!(store.flat_fill("accent").unwrap().to_hex(), "#00ff00");
    }

    #[test]
    fn malformed_seed_leaves_the_document_untouched() {
        let mut store = MemoryStyleStore::new();
        sync_swatch(&mut store, "primary", "#ff0000").unwrap();

        let err = sync_swatch(&mut store, "primary", "#oops!!");
        assert!(err.is_err());
        assert_eq!(store.len(), 16);
        assert_eq!(store.flat_fill("primary").unwrap().to_hex(), "#ff0000");
    }

    #[test]
    fn synchronized_tokens_carry_the_generated_colors() {
        let mut store = MemoryStyleStore::new();
        let palette = sync_swatch(&mut store, "gray", "#808080").unwrap();

        // The /50 step of a mid-gray seed is the seed itself.
        assert_eq!(palette.get("gray/50"), Some("hsla(0, 0%, 50%, 1)"));
        assert_eq!(store.flat_fill("gray/50").unwrap().to_hex(), "#808080");
    }
}
