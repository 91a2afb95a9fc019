// Suggestion candidates and their match tiers.

/// How a lexicon word relates to the composing text.
///
/// Tiers are a strict priority order: a word that qualifies for more than
/// one tier is classified into the highest (`Exact` beats `Prefix` beats
/// `Fuzzy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// The word equals the composing text.
    Exact,
    /// The word starts with the composing text.
    Prefix,
    /// The word contains the composing text somewhere after position zero
    /// (only considered for composing text longer than two characters).
    Fuzzy,
}

impl MatchTier {
    /// Multiplier applied to the word's normalized frequency when computing
    /// candidate confidence.
    pub fn confidence_factor(self) -> f32 {
        match self {
            MatchTier::Exact => 1.0,
            MatchTier::Prefix => 0.9,
            MatchTier::Fuzzy => 0.7,
        }
    }

    /// Whether candidates from this tier may be committed automatically on
    /// a triggering action (e.g. the space key) without explicit selection.
    pub fn auto_commit(self) -> bool {
        matches!(self, MatchTier::Exact)
    }
}

/// A ranked completion/prediction offered for the current composing text.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionCandidate {
    /// The suggested word, in its stored (lexicon) casing.
    pub text: String,
    /// Match quality in `[0, 1]`: normalized frequency scaled by the tier's
    /// confidence factor.
    pub confidence: f32,
    /// Whether this candidate is eligible for auto-commit.
    pub auto_commit: bool,
}

impl SuggestionCandidate {
    /// Build a candidate for a word matched at the given tier.
    pub fn new(text: impl Into<String>, frequency: f32, tier: MatchTier) -> Self {
        Self {
            text: text.into(),
            confidence: frequency * tier.confidence_factor(),
            auto_commit: tier.auto_commit(),
        }
    }
}
