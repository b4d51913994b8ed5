//! Letter banks: the multiset of letters a request may spend.
//!
//! A [`LetterBank`] is built fresh for every request from the normalized input
//! and thrown away afterwards. Every key is a letter of the active alphabet and
//! the counts always sum to the length of the normalized text.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::analysis::normalize;

/// A multiset of characters (`char -> count`).
///
/// Serializes as a map from letter to count, sorted by letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<char, usize>", from = "BTreeMap<char, usize>")]
pub struct LetterBank {
    counts: AHashMap<char, usize>,
    total: usize,
}

impl LetterBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `text` to `alphabet` and count what is left.
    pub fn from_text(text: &str, alphabet: &Alphabet) -> Self {
        build_bank(&normalize(text, alphabet))
    }

    /// Add one occurrence of `c`.
    pub fn add(&mut self, c: char) {
        *self.counts.entry(c).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of occurrences of `c` (zero when absent).
    #[inline]
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of letters in the bank.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct letters.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(letter, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Check whether this bank holds at least as many of every letter as `other`.
    pub fn is_superset_of(&self, other: &LetterBank) -> bool {
        other.iter().all(|(c, n)| self.count(c) >= n)
    }

    /// A sorted copy of the counts, for display and serialization.
    pub fn to_sorted(&self) -> BTreeMap<char, usize> {
        self.counts.iter().map(|(&c, &n)| (c, n)).collect()
    }
}

impl From<LetterBank> for BTreeMap<char, usize> {
    fn from(bank: LetterBank) -> Self {
        bank.to_sorted()
    }
}

impl From<BTreeMap<char, usize>> for LetterBank {
    fn from(counts: BTreeMap<char, usize>) -> Self {
        let counts: AHashMap<char, usize> = counts.into_iter().filter(|&(_, n)| n > 0).collect();
        let total = counts.values().sum();
        Self { counts, total }
    }
}

impl FromIterator<char> for LetterBank {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut bank = LetterBank::new();
        for c in iter {
            bank.add(c);
        }
        bank
    }
}

/// Count the occurrences of each character in an already-normalized string.
pub fn build_bank(letters: &str) -> LetterBank {
    letters.chars().collect()
}
