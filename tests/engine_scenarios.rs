//! Integration tests for the anagram engine.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use letterbank::alphabet::Alphabet;
use letterbank::bank::{LetterBank, build_bank};
use letterbank::dictionary::{Dictionary, DictionaryStore};
use letterbank::engine::{AnagramEngine, EngineConfig, MatchOutcome, MatchRequest, Matches};
use letterbank::error::Result;
use letterbank::matcher::is_valid;

const LATIN_WORDS: &[&str] = &[
    "a", "at", "ate", "eat", "tea", "eta", "east", "seat", "teas", "sate", "rest", "rates",
    "stare", "tears", "aster", "treats", "street", "tester", "setter", "star", "tsar", "arts",
    "rats", "tar", "art", "rat", "sat", "set", "see", "tee", "ester", "reset", "terse", "trees",
    "steer", "stereo", "oats", "stoat", "toast", "otter", "rotate", "zebra",
];

fn latin_engine(words: &[&str]) -> Result<AnagramEngine> {
    AnagramEngine::new(
        Arc::new(Dictionary::from_words(words)),
        EngineConfig::default().with_alphabet(Alphabet::latin()),
    )
}

fn hebrew_engine(words: &[&str]) -> Result<AnagramEngine> {
    AnagramEngine::new(
        Arc::new(Dictionary::from_words(words)),
        EngineConfig::default(),
    )
}

/// Every word of length > 1 that fits the bank, found by brute force.
fn expected_matches(words: &[&str], bank: &LetterBank) -> BTreeSet<String> {
    words
        .iter()
        .filter(|w| w.chars().count() > 1 && is_valid(w, bank))
        .map(|w| w.to_string())
        .collect()
}

#[test]
fn test_reference_example() -> Result<()> {
    let engine = hebrew_engine(&["אב", "בא", "גג", "אבג"])?;

    let words = engine.generate("ג - ב - א", 200);
    assert_eq!(words, vec!["אבג", "אב", "בא"]);

    let words = engine.generate("ג - ב - א", 4);
    assert_eq!(words, vec!["אבג", "אב", "בא"]);

    Ok(())
}

#[test]
fn test_empty_dictionary_returns_nothing() -> Result<()> {
    let engine = hebrew_engine(&[])?;

    for text in ["", "שלום עולם", "abc", "אאאאבבבב"] {
        assert!(engine.generate(text, 200).is_empty());
        assert!(engine.generate_grouped(text).is_empty());
    }

    Ok(())
}

#[test]
fn test_text_without_letters_returns_nothing() -> Result<()> {
    let engine = hebrew_engine(&["אב", "בא", "גג", "אבג"])?;

    let response = engine.search(&MatchRequest::flat("Hello, world! 1234", 200));
    assert_eq!(response.outcome(), MatchOutcome::NoUsableLetters);
    assert_eq!(response.total_matches, 0);
    assert_eq!(response.matches, Matches::Flat(vec![]));

    let response = engine.search(&MatchRequest::grouped("   "));
    assert_eq!(response.outcome(), MatchOutcome::NoUsableLetters);

    Ok(())
}

#[test]
fn test_letters_but_no_matches() -> Result<()> {
    let engine = hebrew_engine(&["גג", "דד"])?;

    let response = engine.search(&MatchRequest::flat("אבג", 200));
    assert_eq!(response.outcome(), MatchOutcome::NoMatches);
    assert_eq!(response.bank.total(), 3);

    Ok(())
}

#[test]
fn test_every_result_is_valid_and_bounded() -> Result<()> {
    let engine = latin_engine(LATIN_WORDS)?;

    for text in ["The great rotating seas", "street", "zebra", "tea", "a"] {
        let bank = LetterBank::from_text(text, &Alphabet::latin());
        let expected = expected_matches(LATIN_WORDS, &bank);

        for limit in [0, 1, 3, 200] {
            let words = engine.generate(text, limit);
            assert!(words.len() <= limit);
            assert!(words.len() <= expected.len());
            for word in &words {
                assert!(word.chars().count() > 1, "{word}");
                assert!(is_valid(word, &bank), "{word} from {text}");
            }
        }
    }

    Ok(())
}

#[test]
fn test_ordering_law() -> Result<()> {
    let engine = latin_engine(LATIN_WORDS)?;
    let words = engine.generate("The great rotating seas", 200);
    assert!(words.len() > 10);

    for pair in words.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (la, lb) = (a.chars().count(), b.chars().count());
        assert!(la > lb || (la == lb && a <= b), "{a} before {b}");
    }

    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    // Separate dictionaries built in a different insertion order.
    let mut reversed: Vec<&str> = LATIN_WORDS.to_vec();
    reversed.reverse();

    let first = latin_engine(LATIN_WORDS)?;
    let second = latin_engine(&reversed)?;

    let text = "Rest easy, tortoise";
    assert_eq!(first.generate(text, 200), first.generate(text, 200));
    assert_eq!(first.generate(text, 200), second.generate(text, 200));
    assert_eq!(first.generate(text, 5), second.generate(text, 5));
    assert_eq!(first.generate_grouped(text), second.generate_grouped(text));

    Ok(())
}

#[test]
fn test_grouping_is_complete() -> Result<()> {
    let engine = latin_engine(LATIN_WORDS)?;
    let text = "The great rotating seas";
    let bank = LetterBank::from_text(text, &Alphabet::latin());
    let expected = expected_matches(LATIN_WORDS, &bank);

    let groups = engine.generate_grouped(text);
    let mut seen = BTreeSet::new();
    let mut previous_len = usize::MAX;
    for (length, words) in groups.iter() {
        assert!(length < previous_len, "groups must be in descending order");
        previous_len = length;
        for word in words {
            assert_eq!(word.chars().count(), length);
            assert!(seen.insert(word.clone()), "{word} appears twice");
        }
    }
    assert_eq!(seen, expected);

    // Grouped mode is never capped.
    let capped = engine.search(&MatchRequest::flat(text, 3));
    assert_eq!(capped.total_matches, expected.len());
    assert_eq!(groups.word_count(), expected.len());

    Ok(())
}

#[test]
fn test_larger_bank_finds_superset() -> Result<()> {
    let engine = latin_engine(LATIN_WORDS)?;

    let small_text = "stare";
    let large_text = "stare at the street";
    let small = build_bank("stare");
    let large = LetterBank::from_text(large_text, &Alphabet::latin());
    assert!(large.is_superset_of(&small));

    let small_words: BTreeSet<String> = engine.generate(small_text, 200).into_iter().collect();
    let large_words: BTreeSet<String> = engine.generate(large_text, 200).into_iter().collect();
    assert!(small_words.is_subset(&large_words));
    assert!(large_words.len() > small_words.len());

    Ok(())
}

#[test]
fn test_repeated_letters_are_counted() -> Result<()> {
    let engine = latin_engine(&["see", "tee", "teeth", "set"])?;

    assert_eq!(engine.generate("set", 10), vec!["set"]);
    assert_eq!(engine.generate("sete", 10), vec!["see", "set", "tee"]);
    assert_eq!(engine.generate("teeth", 10), vec!["teeth", "tee"]);

    Ok(())
}

#[test]
fn test_concurrent_searches_share_one_engine() -> Result<()> {
    let engine = Arc::new(latin_engine(LATIN_WORDS)?);
    let expected = engine.generate("The great rotating seas", 200);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.generate("The great rotating seas", 200))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    Ok(())
}

#[test]
fn test_engine_keeps_snapshot_across_reload() -> Result<()> {
    let store = DictionaryStore::new(Dictionary::from_words(["אב", "בא"]));
    let before = AnagramEngine::with_store(&store, EngineConfig::default())?;

    store.replace(Dictionary::from_words(["אבג"]));
    let after = AnagramEngine::with_store(&store, EngineConfig::default())?;

    assert_eq!(before.generate("אבג", 200), vec!["אב", "בא"]);
    assert_eq!(after.generate("אבג", 200), vec!["אבג"]);

    Ok(())
}
