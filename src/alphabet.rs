//! Alphabets: the fixed set of characters that count as letters.
//!
//! Everything outside the active alphabet is discarded during normalization
//! and rejected when loading a dictionary. An alphabet is a list of inclusive
//! character ranges, so scripts with contiguous blocks (Hebrew, Latin) are
//! cheap to describe and to test against.

use serde::{Deserialize, Serialize};

use crate::error::{LetterbankError, Result};

/// An inclusive range of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

/// A named set of valid letters.
///
/// The default alphabet is Hebrew, `'א'..='ת'`, which also covers the final
/// forms (ך ם ן ף ץ) since they sit inside that block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    name: String,
    ranges: Vec<CharRange>,
}

impl Alphabet {
    /// Create an alphabet from explicit ranges.
    ///
    /// Fails if no range is given or a range is reversed.
    pub fn from_ranges<S: Into<String>>(name: S, ranges: Vec<CharRange>) -> Result<Self> {
        let alphabet = Self {
            name: name.into(),
            ranges,
        };
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Check the range invariants. Deserialized alphabets skip
    /// [`Alphabet::from_ranges`], so configuration loading calls this.
    pub fn validate(&self) -> Result<()> {
        if self.ranges.is_empty() {
            return Err(LetterbankError::invalid_config(format!(
                "alphabet '{}' has no character ranges",
                self.name
            )));
        }
        if let Some(bad) = self.ranges.iter().find(|r| r.start > r.end) {
            return Err(LetterbankError::invalid_config(format!(
                "alphabet '{}' has reversed range {:?}..={:?}",
                self.name, bad.start, bad.end
            )));
        }
        Ok(())
    }

    /// The Hebrew letters, including final forms.
    pub fn hebrew() -> Self {
        Self {
            name: "hebrew".to_string(),
            ranges: vec![CharRange::new('\u{05D0}', '\u{05EA}')],
        }
    }

    /// Basic Latin letters, both cases.
    pub fn latin() -> Self {
        Self {
            name: "latin".to_string(),
            ranges: vec![CharRange::new('a', 'z'), CharRange::new('A', 'Z')],
        }
    }

    /// Look up a built-in alphabet by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hebrew" | "he" => Some(Self::hebrew()),
            "latin" | "en" => Some(Self::latin()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }

    /// Check whether `c` is a letter of this alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.contains(c))
    }

    /// Check whether every character of `word` belongs to this alphabet.
    pub fn contains_all(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::hebrew()
    }
}
