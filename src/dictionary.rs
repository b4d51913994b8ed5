//! Dictionary loading and sharing.
//!
//! A [`Dictionary`] is the immutable set of candidate words. It is loaded once
//! from a newline-delimited text file; a missing file yields an empty
//! dictionary rather than an error. [`DictionaryStore`] wraps the current
//! dictionary so it can be swapped out while searches keep reading the
//! snapshot they started with.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::Result;

/// Counters collected while loading a dictionary file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Unique words kept.
    pub accepted: usize,
    /// Lines that repeated an already accepted word.
    pub duplicates: usize,
    /// Lines with characters outside the alphabet.
    pub rejected: usize,
    /// Blank lines.
    pub blank: usize,
    /// Whether the source file existed at all.
    pub source_found: bool,
}

/// An immutable set of candidate words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from in-memory words, trimming and deduplicating them.
    ///
    /// No alphabet check is applied; use this for synthetic dictionaries.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a dictionary file, keeping only words written in `alphabet`.
    ///
    /// A missing file is not an error: the result is an empty dictionary.
    pub fn load<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> Result<Self> {
        Self::load_with_report(path, alphabet).map(|(dictionary, _)| dictionary)
    }

    /// Like [`Dictionary::load`], also returning what was kept and dropped.
    pub fn load_with_report<P: AsRef<Path>>(
        path: P,
        alphabet: &Alphabet,
    ) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "dictionary source {} not found, using an empty dictionary",
                    path.display()
                );
                return Ok((Self::new(), LoadReport::default()));
            }
            Err(e) => return Err(e.into()),
        };

        let (dictionary, report) = Self::read_from(BufReader::new(file), alphabet)?;
        if report.rejected > 0 {
            warn!(
                "dropped {} dictionary entries with characters outside the {} alphabet",
                report.rejected,
                alphabet.name()
            );
        }
        info!(
            "loaded {} words from {} ({} duplicates)",
            report.accepted,
            path.display(),
            report.duplicates
        );
        Ok((dictionary, report))
    }

    /// Read newline-delimited words from any buffered reader.
    pub fn read_from<R: BufRead>(reader: R, alphabet: &Alphabet) -> Result<(Self, LoadReport)> {
        let mut words = AHashSet::new();
        let mut report = LoadReport {
            source_found: true,
            ..LoadReport::default()
        };

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                report.blank += 1;
                continue;
            }
            if !alphabet.contains_all(word) {
                debug!("line {}: rejected '{}'", line_num + 1, word);
                report.rejected += 1;
                continue;
            }
            if words.insert(word.to_string()) {
                report.accepted += 1;
            } else {
                report.duplicates += 1;
            }
        }

        Ok((Self { words }, report))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn words(&self) -> &AHashSet<String> {
        &self.words
    }
}

/// A shared, swappable handle to the current dictionary.
///
/// Readers take a cheap [`Arc`] snapshot; a reload builds a new dictionary
/// off to the side and swaps the pointer, so in-flight searches never see a
/// half-loaded word set.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    current: Arc<RwLock<Arc<Dictionary>>>,
}

impl DictionaryStore {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(dictionary))),
        }
    }

    /// Load the initial dictionary from a file.
    pub fn open<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> Result<Self> {
        Ok(Self::new(Dictionary::load(path, alphabet)?))
    }

    /// The dictionary as of now.
    pub fn snapshot(&self) -> Arc<Dictionary> {
        Arc::clone(&self.current.read())
    }

    /// Install a new dictionary, returning the previous one.
    pub fn replace(&self, dictionary: Dictionary) -> Arc<Dictionary> {
        let mut guard = self.current.write();
        std::mem::replace(&mut *guard, Arc::new(dictionary))
    }

    /// Re-read the dictionary file and swap it in.
    ///
    /// The file is read before the write lock is taken. On error the current
    /// dictionary stays in place.
    pub fn reload<P: AsRef<Path>>(&self, path: P, alphabet: &Alphabet) -> Result<LoadReport> {
        let (dictionary, report) = Dictionary::load_with_report(path, alphabet)?;
        self.replace(dictionary);
        Ok(report)
    }
}
