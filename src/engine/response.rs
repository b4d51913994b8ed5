//! Search response types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::bank::LetterBank;

/// Matches partitioned by word length (in characters).
///
/// Iteration runs from the longest length down. Each group is the complete,
/// duplicate-free, lexicographically ordered set of matches of that length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedMatches {
    groups: BTreeMap<usize, BTreeSet<String>>,
}

impl GroupedMatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, length: usize, word: String) {
        self.groups.entry(length).or_default().insert(word);
    }

    /// Groups in descending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<String>)> + '_ {
        self.groups.iter().rev().map(|(&len, words)| (len, words))
    }

    /// The group of words with exactly `length` characters.
    pub fn get(&self, length: usize) -> Option<&BTreeSet<String>> {
        self.groups.get(&length)
    }

    /// Lengths present, longest first.
    pub fn lengths(&self) -> Vec<usize> {
        self.groups.keys().rev().copied().collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// Owned, ordered groups for serialization.
    pub fn to_groups(&self) -> Vec<WordGroup> {
        self.iter()
            .map(|(length, words)| WordGroup {
                length,
                words: words.iter().cloned().collect(),
            })
            .collect()
    }
}

/// One length group in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    pub length: usize,
    pub words: Vec<String>,
}

/// Result set in the shape the request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matches {
    Flat(Vec<String>),
    Grouped(GroupedMatches),
}

impl Matches {
    /// Number of words held.
    pub fn word_count(&self) -> usize {
        match self {
            Matches::Flat(words) => words.len(),
            Matches::Grouped(groups) => groups.word_count(),
        }
    }
}

/// How a search ended, so callers can phrase an empty result correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The input had no letters of the alphabet.
    NoUsableLetters,
    /// There were letters, but no dictionary word fits them.
    NoMatches,
    /// At least one word was found.
    Matches,
}

/// The engine's answer to a [`MatchRequest`](super::MatchRequest).
#[derive(Debug, Clone)]
pub struct MatchResponse {
    /// The normalized input.
    pub letters: String,
    /// Letter counts derived from `letters`.
    pub bank: LetterBank,
    /// Number of valid words before any cap was applied.
    pub total_matches: usize,
    pub matches: Matches,
}

impl MatchResponse {
    pub fn outcome(&self) -> MatchOutcome {
        if self.bank.is_empty() {
            MatchOutcome::NoUsableLetters
        } else if self.total_matches == 0 {
            MatchOutcome::NoMatches
        } else {
            MatchOutcome::Matches
        }
    }

    /// True when the flat limit cut off some matches.
    pub fn is_truncated(&self) -> bool {
        self.matches.word_count() < self.total_matches
    }
}
