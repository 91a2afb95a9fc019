// lexi-core: shared leaf types for the lexi suggestion engine.
//
// Everything here is plain data: no I/O, no platform dependencies. The
// engine crate (`lexi-engine`) produces these values; hosting runtimes and
// the CLI tools consume them.

pub mod candidate;
pub mod spelling;

pub use candidate::{MatchTier, SuggestionCandidate};
pub use spelling::SpellingResult;

/// The largest weight a lexicon entry can carry. Confidences are computed
/// as `weight / MAX_WEIGHT`.
pub const MAX_WEIGHT: u8 = u8::MAX;
