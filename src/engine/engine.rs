//! The anagram engine: letter-bank matching over a dictionary.
//!
//! This module provides the core `AnagramEngine` implementation.

use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use crate::analysis::{AlphabetCharFilter, CharFilter, PatternReplaceCharFilter};
use crate::bank::{LetterBank, build_bank};
use crate::dictionary::{Dictionary, DictionaryStore};
use crate::engine::config::EngineConfig;
use crate::engine::request::{MatchMode, MatchRequest};
use crate::engine::response::{GroupedMatches, MatchResponse, Matches};
use crate::error::Result;
use crate::matcher::is_valid;

/// Finds every dictionary word that can be spelled from the letters of a text.
///
/// The engine holds an immutable dictionary snapshot and a chain of char
/// filters ending in the alphabet filter. Each call normalizes the input, builds a fresh [`LetterBank`], keeps the words
/// that fit inside it and are at least `min_word_len` characters long, then
/// either ranks and caps them ([`generate`](Self::generate)) or groups them by
/// length ([`generate_grouped`](Self::generate_grouped)).
///
/// Nothing is mutated during a search, so one engine can serve many threads.
///
/// # Usage Example
///
/// ```
/// use std::sync::Arc;
/// use letterbank::dictionary::Dictionary;
/// use letterbank::engine::{AnagramEngine, EngineConfig};
///
/// let dictionary = Arc::new(Dictionary::from_words(["אב", "בא", "גג", "אבג"]));
/// let engine = AnagramEngine::new(dictionary, EngineConfig::default()).unwrap();
///
/// assert_eq!(engine.generate("ג, ב, א", 200), vec!["אבג", "אב", "בא"]);
/// ```
pub struct AnagramEngine {
    dictionary: Arc<Dictionary>,
    config: EngineConfig,
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl std::fmt::Debug for AnagramEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnagramEngine")
            .field("words", &self.dictionary.len())
            .field("config", &self.config)
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl AnagramEngine {
    /// Create an engine over `dictionary`.
    ///
    /// A configured `strip_pattern` runs first; the alphabet filter always runs
    /// last, so only alphabet letters ever reach the bank.
    ///
    /// Fails if the configuration is invalid or its `strip_pattern` does not compile.
    pub fn new(dictionary: Arc<Dictionary>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::with_capacity(2);
        if let Some(pattern) = &config.strip_pattern {
            char_filters.push(Arc::new(PatternReplaceCharFilter::remove(pattern)?));
        }
        char_filters.push(Arc::new(AlphabetCharFilter::new(config.alphabet.clone())));
        Ok(Self {
            dictionary,
            config,
            char_filters,
        })
    }

    /// Create an engine over the store's current dictionary.
    ///
    /// Later reloads of the store do not affect this engine.
    pub fn with_store(store: &DictionaryStore, config: EngineConfig) -> Result<Self> {
        Self::new(store.snapshot(), config)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `text` through the char filters in order.
    pub fn normalize(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
    }

    /// Normalize `text` and count its letters.
    pub fn letter_bank(&self, text: &str) -> (String, LetterBank) {
        let letters = self.normalize(text);
        let bank = build_bank(&letters);
        (letters, bank)
    }

    /// Valid words paired with their length in characters, in no particular order.
    fn collect_matches<'a>(&'a self, bank: &LetterBank) -> Vec<(usize, &'a str)> {
        if bank.is_empty() {
            return Vec::new();
        }

        let min_len = self.config.min_word_len;
        let keep = |word: &'a String| -> Option<(usize, &'a str)> {
            let len = word.chars().count();
            (len >= min_len && is_valid(word, bank)).then_some((len, word.as_str()))
        };

        let words = self.dictionary.words();
        if self.config.parallel {
            words.iter().par_bridge().filter_map(keep).collect()
        } else {
            words.iter().filter_map(keep).collect()
        }
    }

    /// Run a search in the requested mode.
    pub fn search(&self, request: &MatchRequest) -> MatchResponse {
        let start = Instant::now();
        let (letters, bank) = self.letter_bank(&request.text);
        let found = self.collect_matches(&bank);
        let total_matches = found.len();

        let matches = match request.mode {
            MatchMode::Flat { limit } => Matches::Flat(rank(found, limit)),
            MatchMode::Grouped => Matches::Grouped(group(found)),
        };

        debug!(
            "search: {} letters ({} distinct), {} of {} words matched in {:?}",
            bank.total(),
            bank.distinct(),
            total_matches,
            self.dictionary.len(),
            start.elapsed()
        );

        MatchResponse {
            letters,
            bank,
            total_matches,
            matches,
        }
    }

    /// The longest words first, ties broken lexicographically, at most `limit` of them.
    pub fn generate(&self, text: &str, limit: usize) -> Vec<String> {
        let (_, bank) = self.letter_bank(text);
        rank(self.collect_matches(&bank), limit)
    }

    /// Every match, grouped by length with the longest group first.
    pub fn generate_grouped(&self, text: &str) -> GroupedMatches {
        let (_, bank) = self.letter_bank(text);
        group(self.collect_matches(&bank))
    }
}

/// Sort by (descending length, ascending word) and keep the first `limit`.
///
/// The key is total, so the order never depends on dictionary iteration order.
fn rank(mut found: Vec<(usize, &str)>, limit: usize) -> Vec<String> {
    found.sort_unstable_by_key(|&(len, word)| (Reverse(len), word));
    found
        .into_iter()
        .take(limit)
        .map(|(_, word)| word.to_string())
        .collect()
}

fn group(found: Vec<(usize, &str)>) -> GroupedMatches {
    let mut groups = GroupedMatches::new();
    for (len, word) in found {
        groups.insert(len, word.to_string());
    }
    groups
}
