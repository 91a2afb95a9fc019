// Tiered completion ranking for composing text.
//
// Every lexicon word is classified into at most one tier against the
// lowercased composing text (exact, then prefix, then fuzzy). Tiers are
// concatenated in priority order and the combined list is truncated; a
// flood of prefix matches can therefore starve the fuzzy tier entirely.
// That is the intended ranking policy, not an accident of implementation.

use lexi_core::{MatchTier, SuggestionCandidate};

use crate::lexicon::Lexicon;

/// Cap on candidates returned for empty composing text.
pub const EMPTY_INPUT_LIMIT: usize = 3;

/// Composing text must be longer than this for the fuzzy tier to apply.
pub const MIN_FUZZY_LEN: usize = 2;

/// Produce ranked completion candidates for the current composing text.
///
/// Empty composing text yields the top `min(max_candidates, 3)` words by
/// weight, none auto-committable. Otherwise candidates are tier-classified,
/// sorted within each tier by descending confidence (stable, so equal
/// weights keep lexicon scan order), concatenated Exact -> Prefix -> Fuzzy
/// and truncated to `max_candidates`.
///
/// Classification compares the *stored* lexicon word against the lowercased
/// composing text. Unlike the speller, which lowercases entries before
/// matching, an entry carrying an uppercase letter (e.g. a proper noun)
/// never matches any tier here. Completion lexicons are expected to store
/// lowercase forms; entries that deviate are invisible to prediction but
/// still count for spell checking.
pub fn predict(
    lexicon: &Lexicon,
    composing: &str,
    max_candidates: usize,
) -> Vec<SuggestionCandidate> {
    if composing.is_empty() {
        return top_by_weight(lexicon, max_candidates.min(EMPTY_INPUT_LIMIT));
    }

    let needle = composing.to_lowercase();
    let fuzzy_allowed = needle.chars().count() > MIN_FUZZY_LEN;

    // (weight, candidate) pairs per tier; weight drives the sort so no
    // float comparisons are needed (the factor is tier-constant).
    let mut exact: Vec<(u8, SuggestionCandidate)> = Vec::new();
    let mut prefix: Vec<(u8, SuggestionCandidate)> = Vec::new();
    let mut fuzzy: Vec<(u8, SuggestionCandidate)> = Vec::new();

    for (word, weight) in lexicon.words() {
        let tier = if word == needle {
            MatchTier::Exact
        } else if word.starts_with(needle.as_str()) {
            MatchTier::Prefix
        } else if fuzzy_allowed && word.contains(needle.as_str()) {
            MatchTier::Fuzzy
        } else {
            continue;
        };

        let candidate = SuggestionCandidate::new(word, lexicon.frequency_of(word), tier);
        match tier {
            MatchTier::Exact => exact.push((weight, candidate)),
            MatchTier::Prefix => prefix.push((weight, candidate)),
            MatchTier::Fuzzy => fuzzy.push((weight, candidate)),
        }
    }

    let mut ranked = Vec::with_capacity(exact.len() + prefix.len() + fuzzy.len());
    for tier in [&mut exact, &mut prefix, &mut fuzzy] {
        tier.sort_by(|a, b| b.0.cmp(&a.0)); // stable descending
        ranked.extend(tier.drain(..).map(|(_, candidate)| candidate));
    }
    ranked.truncate(max_candidates);
    ranked
}

/// The highest-weight words in the lexicon, for empty composing text.
fn top_by_weight(lexicon: &Lexicon, limit: usize) -> Vec<SuggestionCandidate> {
    let mut entries: Vec<(&str, u8)> = lexicon.words().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);
    entries
        .into_iter()
        .map(|(word, _)| SuggestionCandidate {
            text: word.to_string(),
            confidence: lexicon.frequency_of(word),
            auto_commit: false,
        })
        .collect()
}
