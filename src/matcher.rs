//! Multiset-subset matching of candidate words against a letter bank.
//!
//! A word is valid for a bank iff, for every character, the word uses it no
//! more often than the bank holds it. Letter order never matters, so the test
//! counts characters instead of comparing positions.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::bank::LetterBank;

/// Per-letter shortfall of a word against a bank, floored at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterDeficit {
    missing: BTreeMap<char, usize>,
}

impl LetterDeficit {
    /// True when the bank covers the word completely.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// How many more of `c` the bank would need.
    pub fn missing(&self, c: char) -> usize {
        self.missing.get(&c).copied().unwrap_or(0)
    }

    /// Total number of missing letters.
    pub fn total(&self) -> usize {
        self.missing.values().sum()
    }

    /// Missing letters in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.missing.iter().map(|(&c, &n)| (c, n))
    }
}

fn word_counts(word: &str) -> AHashMap<char, usize> {
    let mut counts = AHashMap::with_capacity(word.len());
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Check whether `word` can be spelled from the letters in `bank`.
pub fn is_valid(word: &str, bank: &LetterBank) -> bool {
    // Cheap rejection before counting anything.
    if word.chars().count() > bank.total() {
        return false;
    }
    word_counts(word)
        .into_iter()
        .all(|(c, needed)| needed <= bank.count(c))
}

/// Compute which letters `bank` lacks to spell `word`.
pub fn deficit(word: &str, bank: &LetterBank) -> LetterDeficit {
    let missing = word_counts(word)
        .into_iter()
        .filter_map(|(c, needed)| {
            let have = bank.count(c);
            (needed > have).then(|| (c, needed - have))
        })
        .collect();
    LetterDeficit { missing }
}
