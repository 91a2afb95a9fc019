// End-to-end scenarios against the public service facade.

use std::sync::Arc;
use std::thread;

use lexi_engine::{SpellingResult, SuggestionService};

const SAMPLE: &[u8] = br#"{"the": 255, "there": 200, "their": 180, "cat": 50}"#;

fn loaded_service() -> SuggestionService {
    let service = SuggestionService::new();
    service
        .load_from_json_bytes(SAMPLE)
        .expect("sample lexicon should load");
    service
}

#[test]
fn vocabulary_words_are_valid() {
    let service = loaded_service();
    for word in ["the", "there", "their", "cat"] {
        assert_eq!(service.check_spelling(word, 5), SpellingResult::Valid);
    }
}

#[test]
fn short_words_are_valid_regardless_of_membership() {
    let service = loaded_service();
    for word in ["a", "xy", "zz", ""] {
        assert_eq!(service.check_spelling(word, 5), SpellingResult::Valid);
    }
}

#[test]
fn teh_is_corrected_to_the() {
    let service = loaded_service();
    let result = service.check_spelling("teh", 2);
    let corrections = result.corrections();
    assert!(!result.is_valid());
    assert!(corrections.len() <= 2);
    assert_eq!(corrections[0], "the");
}

#[test]
fn correction_budget_changes_do_not_leak_between_queries() {
    let service = loaded_service();
    // Zero budget: every correction is truncated away, so the engine
    // fails open for this query only.
    assert_eq!(service.check_spelling("teh", 0), SpellingResult::Valid);
    // A later query with a budget gets the real verdict.
    let result = service.check_spelling("teh", 5);
    assert!(!result.is_valid());
    assert_eq!(result.corrections()[0], "the");
    // And the fail-open answer is still given when asked for again.
    assert_eq!(service.check_spelling("teh", 0), SpellingResult::Valid);
}

#[test]
fn suggest_the_ranks_exact_before_prefixes() {
    let service = loaded_service();
    let candidates = service.suggest("the", 5);
    let words: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(words, vec!["the", "there", "their"]);
    assert!(candidates[0].auto_commit);
    assert!(candidates[1..].iter().all(|c| !c.auto_commit));
}

#[test]
fn suggest_empty_returns_top_words_by_frequency() {
    let service = loaded_service();
    let candidates = service.suggest("", 10);
    assert_eq!(candidates.len(), 3);
    for pair in candidates.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    assert!(candidates.iter().all(|c| !c.auto_commit));
}

#[test]
fn fuzzy_candidates_contain_but_never_start_with_the_input() {
    let service = loaded_service();
    for candidate in service.suggest("her", 10) {
        assert!(candidate.text.contains("her"));
        assert!(!candidate.text.starts_with("her"));
    }
}

#[test]
fn double_load_yields_identical_results() {
    let first = SuggestionService::new();
    first.load_from_json_bytes(SAMPLE).unwrap();
    first.load_from_json_bytes(SAMPLE).unwrap();

    let second = loaded_service();

    for word in ["the", "teh", "ther", "zzz"] {
        assert_eq!(
            first.check_spelling(word, 3),
            second.check_spelling(word, 3)
        );
    }
    for composing in ["", "th", "the", "her"] {
        assert_eq!(first.suggest(composing, 5), second.suggest(composing, 5));
    }
}

#[test]
fn concurrent_queries_share_one_service() {
    let service = Arc::new(loaded_service());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(service.check_spelling("cat", 5), SpellingResult::Valid);
                    let candidates = service.suggest("the", 5);
                    assert_eq!(candidates[0].text, "the");
                    if i % 2 == 0 {
                        service.suggestion_accepted("the");
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("query thread should not panic");
    }
}

#[test]
fn queries_racing_a_load_see_either_nothing_or_everything() {
    let service = Arc::new(SuggestionService::new());

    let loader = {
        let service = Arc::clone(&service);
        thread::spawn(move || service.load_from_json_bytes(SAMPLE).unwrap())
    };

    // Readers either observe the unloaded fail-open state or the complete
    // lexicon; never a partial one.
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..100 {
                    let candidates = service.suggest("the", 5);
                    assert!(candidates.is_empty() || candidates.len() == 3);
                }
            })
        })
        .collect();

    loader.join().expect("loader should not panic");
    for reader in readers {
        reader.join().expect("reader should not panic");
    }

    assert!(service.is_ready());
}

#[test]
fn malformed_asset_degrades_to_fail_open() {
    let service = SuggestionService::new();
    assert!(service.load_from_json_bytes(b"{\"word\": \"oops\"}").is_err());
    // The keyboard keeps typing: every word passes, nothing is suggested.
    assert_eq!(service.check_spelling("qqqqq", 5), SpellingResult::Valid);
    assert!(service.suggest("qq", 5).is_empty());
}
