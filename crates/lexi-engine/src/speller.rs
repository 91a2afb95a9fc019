// Spell checking over the lexicon.
//
// Policy: fail open. A word the engine cannot improve on is reported as
// valid; the hosting keyboard must never flag text it has no better guess
// for, and must never crash on this path.

use lexi_core::SpellingResult;

use crate::distance::levenshtein;
use crate::lexicon::Lexicon;

/// Maximum edit distance for a lexicon word to count as a correction.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Words shorter than this (after trimming) are never spell-checked.
pub const MIN_CHECKED_LEN: usize = 3;

/// Options controlling how words are evaluated.
#[derive(Debug, Clone, Copy)]
pub struct SpellOptions {
    /// Accepted for API stability; no offensive-content filtering policy is
    /// enforced yet.
    pub allow_possibly_offensive: bool,
    /// Accepted for API stability; private sessions currently behave like
    /// regular ones (the engine never learns from queries either way).
    pub private_session: bool,
}

impl Default for SpellOptions {
    fn default() -> Self {
        Self {
            allow_possibly_offensive: false,
            private_session: false,
        }
    }
}

/// Whether `word` is valid independently of any correction budget: a
/// lexicon hit in either casing, or a token too short to check. A `Valid`
/// verdict from the scan path is *not* established — with a zero correction
/// budget it can be a truncation artifact — so only established verdicts
/// are safe to memoize.
pub fn is_established_valid(lexicon: &Lexicon, word: &str) -> bool {
    let trimmed = word.trim();
    let normalized = trimmed.to_lowercase();
    lexicon.contains(trimmed)
        || lexicon.contains(&normalized)
        || normalized.chars().count() < MIN_CHECKED_LEN
}

/// Check whether `word` is correctly spelled against the lexicon.
///
/// The word is trimmed and tried in both its original casing and fully
/// lowercased. Unknown words of at least [`MIN_CHECKED_LEN`] characters are
/// matched against the whole lexicon by edit distance; corrections within
/// distance 1..=[`MAX_EDIT_DISTANCE`] are returned best-first (highest
/// weight first, ties keeping lexicon scan order), truncated to
/// `max_corrections`. If nothing qualifies the word is assumed valid.
pub fn check_spelling(
    lexicon: &Lexicon,
    word: &str,
    max_corrections: usize,
    _options: &SpellOptions,
) -> SpellingResult {
    let trimmed = word.trim();
    let normalized = trimmed.to_lowercase();

    if lexicon.contains(trimmed) || lexicon.contains(&normalized) {
        return SpellingResult::Valid;
    }
    if normalized.chars().count() < MIN_CHECKED_LEN {
        // Short tokens are not spell-checked.
        return SpellingResult::Valid;
    }

    let target: Vec<char> = normalized.chars().collect();
    let mut candidates: Vec<(String, u8)> = Vec::new();
    for (entry, weight) in lexicon.words() {
        let entry_chars: Vec<char> = entry.to_lowercase().chars().collect();
        let d = levenshtein(&target, &entry_chars);
        // d == 0 means a case-only difference already rejected above; the
        // stored casing is not offered as a correction.
        if (1..=MAX_EDIT_DISTANCE).contains(&d) {
            candidates.push((entry.to_string(), weight));
        }
    }

    // Stable sort: equal weights keep scan order.
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.truncate(max_corrections);

    if candidates.is_empty() {
        SpellingResult::Valid
    } else {
        SpellingResult::Typo {
            corrections: candidates.into_iter().map(|(word, _)| word).collect(),
        }
    }
}
