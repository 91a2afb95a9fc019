// Suggestion service facade.
//
// An explicitly constructed, injectable instance meant to be owned by the
// hosting runtime's composition root. One mutex guards the lexicon, the
// spell cache and the options: the loader parses while holding it, so a
// query that arrives mid-load blocks until the lexicon is fully populated
// and then runs against it. Reads stay serialized after load; at this
// vocabulary scale that is a correctness choice, not a bottleneck.

use std::sync::{Mutex, MutexGuard};

use lexi_core::{SpellingResult, SuggestionCandidate};

use crate::cache::SpellCache;
use crate::lexicon::{Lexicon, LexiconError};
use crate::ranker;
use crate::speller::{self, SpellOptions};

/// Everything behind the service mutex.
#[derive(Debug, Default)]
struct ServiceState {
    lexicon: Option<Lexicon>,
    cache: SpellCache,
    options: SpellOptions,
}

/// Thread-safe facade over the lexicon, speller and ranker.
///
/// All query methods are total: before a successful load (or after a failed
/// one) they fail open, answering `Valid` / no candidates. The keyboard
/// must never crash or visibly error because of this component.
pub struct SuggestionService {
    state: Mutex<ServiceState>,
}

impl SuggestionService {
    /// Create an empty, unloaded service.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ServiceState::default()),
        }
    }

    /// Lock the shared state, recovering from poisoning. A panic while the
    /// lock was held can only have happened in a read path, which never
    /// mutates the lexicon, so the inner data is still usable.
    fn lock(&self) -> MutexGuard<'_, ServiceState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Load the lexicon from raw JSON bytes.
    ///
    /// Idempotent: once a lexicon is loaded, repeat calls are a no-op
    /// `Ok(())`. Parsing happens while the mutex is held, so concurrent
    /// queries block until the load completes.
    pub fn load_from_json_bytes(&self, bytes: &[u8]) -> Result<(), LexiconError> {
        let mut state = self.lock();
        if state.lexicon.is_some() {
            return Ok(());
        }
        let lexicon = Lexicon::from_json_bytes(bytes)?;
        log::debug!("lexicon loaded: {} entries", lexicon.len());
        state.lexicon = Some(lexicon);
        Ok(())
    }

    /// Whether a lexicon has been loaded.
    pub fn is_ready(&self) -> bool {
        self.lock().lexicon.is_some()
    }

    /// Check the spelling of a committed word. Unloaded services answer
    /// `Valid`. Established valid verdicts (lexicon hits, short tokens) go
    /// through the spell cache; fail-open verdicts are recomputed per query.
    pub fn check_spelling(&self, word: &str, max_corrections: usize) -> SpellingResult {
        let mut state = self.lock();
        let ServiceState {
            lexicon,
            cache,
            options,
        } = &mut *state;
        let Some(lexicon) = lexicon.as_ref() else {
            return SpellingResult::Valid;
        };
        let trimmed = word.trim();
        cache.spell_with_cache(trimmed, || {
            // A fail-open verdict from the correction scan depends on
            // `max_corrections` (a zero budget truncates every correction
            // away), so only budget-independent verdicts are memoized.
            let memoizable = speller::is_established_valid(lexicon, trimmed);
            (
                speller::check_spelling(lexicon, trimmed, max_corrections, options),
                memoizable,
            )
        })
    }

    /// Ranked completion candidates for the current composing text.
    /// Unloaded services answer no candidates.
    pub fn suggest(&self, composing: &str, max_candidates: usize) -> Vec<SuggestionCandidate> {
        let state = self.lock();
        match state.lexicon.as_ref() {
            Some(lexicon) => ranker::predict(lexicon, composing, max_candidates),
            None => Vec::new(),
        }
    }

    /// Current spell options.
    pub fn options(&self) -> SpellOptions {
        self.lock().options
    }

    /// Replace the spell options.
    pub fn set_options(&self, options: SpellOptions) {
        self.lock().options = options;
    }

    /// Export every `(word, weight)` entry, in scan order. Empty before
    /// load.
    pub fn export_words(&self) -> Vec<(String, u8)> {
        let state = self.lock();
        match state.lexicon.as_ref() {
            Some(lexicon) => lexicon
                .words()
                .map(|(word, weight)| (word.to_string(), weight))
                .collect(),
            None => Vec::new(),
        }
    }

    // -- Notification hooks --------------------------------------------------
    // The hosting runtime reports what the user did with a suggestion.
    // The lexicon is static (no online learning), so these only log.

    /// The user accepted a suggestion.
    pub fn suggestion_accepted(&self, text: &str) {
        log::debug!("suggestion accepted: {text}");
    }

    /// The user reverted a previously accepted suggestion.
    pub fn suggestion_reverted(&self, text: &str) {
        log::debug!("suggestion reverted: {text}");
    }

    /// The user removed a suggestion from the candidate strip.
    pub fn suggestion_removed(&self, text: &str) {
        log::debug!("suggestion removed: {text}");
    }

    /// Tear the service down. No resources need explicit release; this
    /// exists to give hosting runtimes a definite end-of-life call.
    pub fn shutdown(self) {
        // Dropped here.
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}
