//! Palette — the ordered token → color-string mapping a ramp produces.

use indexmap::IndexMap;

/// A generated palette: token name → CSS color string.
///
/// Iteration order is insertion order: the base token first, then the
/// eleven lightness steps ascending, then the alpha steps ascending.
/// Keys are unique by construction — the base token has no `/`, every
/// derived token does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: IndexMap<String, String>,
}

impl Palette {
    /// Create an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add a token. Later writes to the same name would overwrite, but the
    /// generator never emits colliding names.
    pub(crate) fn insert(&mut self, name: String, color: String) {
        self.entries.insert(name, color);
    }

    /// Look up a token's color string.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the palette holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(token, color)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
