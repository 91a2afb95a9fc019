// Bounded memo for spell verdicts.
//
// Only valid verdicts are cached: a typo verdict would have to carry its
// corrections list, and recomputing one is cheap relative to storing it.
// Long words are skipped, and a full cache drops new entries instead of
// evicting old ones.

use hashbrown::HashSet;

use lexi_core::SpellingResult;

/// Maximum word length (in characters) that can be cached.
pub const MAX_CACHED_WORD_LEN: usize = 10;

/// Default cache capacity in entries.
pub const DEFAULT_CAPACITY: usize = 1024;

/// A bounded set of words known to be valid.
#[derive(Debug)]
pub struct SpellCache {
    capacity: usize,
    valid: HashSet<String>,
}

impl SpellCache {
    /// Create a cache holding at most `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            valid: HashSet::new(),
        }
    }

    /// Whether `word` has a cached valid verdict.
    pub fn is_cached_valid(&self, word: &str) -> bool {
        self.valid.contains(word)
    }

    /// Record a valid verdict for `word`. Over-long words and inserts into
    /// a full cache are silently ignored.
    pub fn note_valid(&mut self, word: &str) {
        if word.chars().count() > MAX_CACHED_WORD_LEN || self.valid.len() >= self.capacity {
            return;
        }
        self.valid.insert(word.to_string());
    }

    /// Number of cached words.
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// Look up `word`, invoking `check` on a miss. `check` returns the
    /// verdict plus whether it may be memoized; a valid verdict is only
    /// stored when it holds for every query (some valid verdicts depend on
    /// the caller's correction budget). Typo verdicts are never cached.
    pub fn spell_with_cache(
        &mut self,
        word: &str,
        check: impl FnOnce() -> (SpellingResult, bool),
    ) -> SpellingResult {
        if self.is_cached_valid(word) {
            return SpellingResult::Valid;
        }
        let (result, memoizable) = check();
        if memoizable && result.is_valid() {
            self.note_valid(word);
        }
        result
    }
}

impl Default for SpellCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_is_empty() {
        let cache = SpellCache::default();
        assert!(cache.is_empty());
        assert!(!cache.is_cached_valid("word"));
    }

    #[test]
    fn memoizable_valid_verdicts_are_cached() {
        let mut cache = SpellCache::default();
        let result = cache.spell_with_cache("cat", || (SpellingResult::Valid, true));
        assert!(result.is_valid());
        assert!(cache.is_cached_valid("cat"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn non_memoizable_valid_verdicts_are_not_cached() {
        let mut cache = SpellCache::default();
        let result = cache.spell_with_cache("teh", || (SpellingResult::Valid, false));
        assert!(result.is_valid());
        assert!(!cache.is_cached_valid("teh"));
        assert!(cache.is_empty());
    }

    #[test]
    fn cached_word_short_circuits_the_check() {
        let mut cache = SpellCache::default();
        cache.note_valid("cat");
        let result = cache.spell_with_cache("cat", || {
            panic!("check should not run on a cache hit")
        });
        assert!(result.is_valid());
    }

    #[test]
    fn typo_verdicts_are_not_cached() {
        let mut cache = SpellCache::default();
        let typo = SpellingResult::Typo {
            corrections: vec!["the".to_string()],
        };
        let result = cache.spell_with_cache("teh", || (typo.clone(), true));
        assert_eq!(result, typo);
        assert!(!cache.is_cached_valid("teh"));
        assert!(cache.is_empty());
    }

    #[test]
    fn long_words_are_not_cached() {
        let mut cache = SpellCache::default();
        cache.note_valid("abcdefghijk"); // 11 chars
        assert!(cache.is_empty());
        cache.note_valid("abcdefghij"); // 10 chars
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn full_cache_drops_new_entries() {
        let mut cache = SpellCache::new(2);
        cache.note_valid("one");
        cache.note_valid("two");
        cache.note_valid("six");
        assert_eq!(cache.len(), 2);
        assert!(cache.is_cached_valid("one"));
        assert!(cache.is_cached_valid("two"));
        assert!(!cache.is_cached_valid("six"));
    }

    #[test]
    fn repeat_insert_does_not_grow_cache() {
        let mut cache = SpellCache::default();
        cache.note_valid("cat");
        cache.note_valid("cat");
        assert_eq!(cache.len(), 1);
    }
}
