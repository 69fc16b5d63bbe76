//! Spinner symbol sets.

use std::sync::Arc;

/// An ordered, non-empty sequence of spinner glyphs.
///
/// Emptiness is rejected at construction, so every `SymbolSet` can be
/// indexed modulo its length. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Arc<[String]>,
}

impl SymbolSet {
    /// Name of the set buttons ask for by default.
    pub const FALLBACK_NAME: &'static str = "classic";

    /// Create a symbol set. Returns `None` for an empty sequence.
    pub fn new<I, S>(symbols: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Arc<[String]> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            None
        } else {
            Some(Self { symbols })
        }
    }

    /// The built-in `| / - \` sequence.
    pub fn classic() -> Self {
        Self {
            symbols: ["|", "/", "-", "\\"].into_iter().map(String::from).collect(),
        }
    }

    /// Number of symbols; always at least one.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Symbol at `index`, wrapping around the end of the sequence.
    pub fn get(&self, index: usize) -> &str {
        &self.symbols[index % self.symbols.len()]
    }

    /// The first symbol, shown before the first tick.
    pub fn first(&self) -> &str {
        &self.symbols[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::classic()
    }
}
