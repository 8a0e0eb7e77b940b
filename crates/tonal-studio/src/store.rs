//! Style storage — the document side of synchronization.
//!
//! [`StyleStore`] is the narrow capability a document host must provide:
//! look up a named style, create one, rename it, repaint it. The sync layer
//! never sees the document itself, only this seam, so a real host can stand
//! in without touching the engine. [`MemoryStyleStore`] is the in-process
//! reference document used by the CLI and the tests.

use tracing::warn;

use crate::paint::{Paint, SolidColor};

// ---------------------------------------------------------------------------
// StyleStore
// ---------------------------------------------------------------------------

/// The capability a document host provides for style synchronization.
///
/// `set_style_paint` receives the color as a CSS color string; how the host
/// turns that into a persisted fill is the host's concern, and
/// synchronization assumes no failure mode on this seam.
pub trait StyleStore {
    /// Store-specific style handle. Handles are only meaningful to the
    /// store that issued them.
    type Handle: Copy;

    /// Find an existing style by exact name match.
    fn find_style_by_name(&self, name: &str) -> Option<Self::Handle>;

    /// Create a new, unnamed, unpainted style.
    fn create_style(&mut self) -> Self::Handle;

    /// Set a style's name.
    fn set_style_name(&mut self, handle: Self::Handle, name: &str);

    /// Set a style's paint from a CSS color string.
    fn set_style_paint(&mut self, handle: Self::Handle, css_color: &str);
}

// ---------------------------------------------------------------------------
// PaintStyle
// ---------------------------------------------------------------------------

/// Handle to a style inside a [`MemoryStyleStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(usize);

/// A named paint style in the in-memory document.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    name: String,
    paint: Option<Paint>,
}

impl PaintStyle {
    /// The style's name. Empty until the first `set_style_name`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The style's paint, if it has one.
    #[must_use]
    pub fn paint(&self) -> Option<&Paint> {
        self.paint.as_ref()
    }
}

// ---------------------------------------------------------------------------
// MemoryStyleStore
// ---------------------------------------------------------------------------

/// In-memory style document — creation-ordered, name-addressed.
#[derive(Debug, Default)]
pub struct MemoryStyleStore {
    styles: Vec<PaintStyle>,
}

impl MemoryStyleStore {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    /// Insert a style directly, bypassing the sync path. This is the
    /// bootstrap hook for documents that already contain styles.
    pub fn insert_style(&mut self, name: &str, paint: Option<Paint>) -> StyleId {
        self.styles.push(PaintStyle {
            name: name.to_string(),
            paint,
        });
        StyleId(self.styles.len() - 1)
    }

    /// All styles, in creation order.
    pub fn styles(&self) -> impl Iterator<Item = &PaintStyle> {
        self.styles.iter()
    }

    /// Number of styles in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True if the document holds no styles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The flat fill of the named style: its solid paint's color, or `None`
    /// if the style is absent, unpainted, or filled with a gradient.
    #[must_use]
    pub fn flat_fill(&self, name: &str) -> Option<SolidColor> {
        self.styles
            .iter()
            .find(|style| style.name == name)?
            .paint
            .as_ref()?
            .as_solid()
    }
}

impl StyleStore for MemoryStyleStore {
    type Handle = StyleId;

    fn find_style_by_name(&self, name: &str) -> Option<StyleId> {
        self.styles
            .iter()
            .position(|style| style.name == name)
            .map(StyleId)
    }

    fn create_style(&mut self) -> StyleId {
        self.styles.push(PaintStyle {
            name: String::new(),
            paint: None,
        });
        StyleId(self.styles.len() - 1)
    }

    fn set_style_name(&mut self, handle: StyleId, name: &str) {
        self.styles[handle.0].name = name.to_string();
    }

    fn set_style_paint(&mut self, handle: StyleId, css_color: &str) {
        let paint = Paint::solid_from_css(css_color);
        if paint.is_none() {
            // Host contract has no failure mode here: unusable input leaves
            // the style unpainted rather than panicking mid-sync.
            warn!(css_color, "could not build a solid paint, clearing fill");
        }
        self.styles[handle.0].paint = paint;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
