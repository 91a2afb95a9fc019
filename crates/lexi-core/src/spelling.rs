// Spell-check result type shared between the engine and its consumers.

/// Outcome of checking a single committed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellingResult {
    /// The word is correctly spelled, too short to judge, or the engine
    /// found no plausible correction and declines to flag it.
    Valid,
    /// The word looks misspelled.
    Typo {
        /// Plausible corrections, best first. Never empty; bounded by the
        /// correction count the caller requested.
        corrections: Vec<String>,
    },
}

impl SpellingResult {
    /// Returns `true` for the `Valid` variant.
    pub fn is_valid(&self) -> bool {
        matches!(self, SpellingResult::Valid)
    }

    /// The corrections carried by a `Typo` result; empty for `Valid`.
    pub fn corrections(&self) -> &[String] {
        match self {
            SpellingResult::Valid => &[],
            SpellingResult::Typo { corrections } => corrections,
        }
    }
}
