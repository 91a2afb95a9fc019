// lexi-engine: a bounded spelling and suggestion engine.
//
// Given a fixed lexicon of words with frequency weights, the engine answers
// two queries:
//   - `check_spelling`: is a committed word valid, and if not, what are its
//     likely corrections (Levenshtein distance over the whole lexicon);
//   - `predict`: which completions should be offered for the text currently
//     being composed (exact / prefix / fuzzy tiers weighted by frequency).
//
// Architecture:
//   - `lexicon`: immutable-after-load word -> weight store
//   - `distance`: Levenshtein edit distance matcher
//   - `speller`: spell check over the lexicon, fail-open by policy
//   - `ranker`: tiered completion ranking
//   - `cache`: bounded memo for valid spell verdicts
//   - `service`: thread-safe facade owning lexicon, cache and options

pub mod cache;
pub mod distance;
pub mod lexicon;
pub mod ranker;
pub mod service;
pub mod speller;

pub use lexicon::{Lexicon, LexiconError};
pub use service::SuggestionService;
pub use speller::SpellOptions;

// Re-exported so consumers can depend on this crate alone.
pub use lexi_core::{MatchTier, SpellingResult, SuggestionCandidate};
