// Lexicon store: the word -> frequency-weight mapping.
//
// Loaded once from a bundled JSON asset (a flat object mapping each word to
// an integer weight in 0..=255) and immutable afterwards. Scans iterate in
// sorted word order so query results are deterministic regardless of how
// the asset file orders its keys.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::Deserialize;

use lexi_core::MAX_WEIGHT;

/// Errors raised while loading a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The asset is not a flat JSON object of word -> weight (0..=255).
    #[error("malformed lexicon data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The asset file could not be read.
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk shape of the lexicon asset. Weights outside `u8` range make the
/// whole asset a parse error rather than being clamped.
#[derive(Deserialize)]
#[serde(transparent)]
struct RawLexicon(BTreeMap<String, u8>);

/// An immutable-after-load vocabulary of words with frequency weights.
///
/// Entries are held twice: a sorted vector for deterministic scans and a
/// hash index for O(1) membership lookups. Words are case-sensitive as
/// stored; callers decide which case variants to try.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// All entries, sorted by word.
    entries: Vec<(String, u8)>,
    /// Word -> position in `entries`.
    index: HashMap<String, usize>,
}

impl Lexicon {
    /// Parse a lexicon from raw JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        let raw: RawLexicon = serde_json::from_slice(bytes)?;
        Ok(Self::from_entries(raw.0))
    }

    /// Build a lexicon from in-memory entries. Duplicate words keep the
    /// last weight seen. Used by tests and benchmarks; production loads go
    /// through `from_json_bytes`.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, u8)>) -> Self {
        // BTreeMap both deduplicates and sorts.
        let sorted: BTreeMap<String, u8> = entries.into_iter().collect();
        let entries: Vec<(String, u8)> = sorted.into_iter().collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (word, _))| (word.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The stored weight of a word, if present.
    pub fn weight_of(&self, word: &str) -> Option<u8> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Normalized frequency in `[0, 1]`: `weight / 255`, or `0.0` if the
    /// word is absent.
    pub fn frequency_of(&self, word: &str) -> f32 {
        match self.weight_of(word) {
            Some(weight) => f32::from(weight) / f32::from(MAX_WEIGHT),
            None => 0.0,
        }
    }

    /// Iterate over every `(word, weight)` entry in sorted word order.
    pub fn words(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(word, weight)| (word.as_str(), *weight))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
