//! Engine configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{LetterbankError, Result};

/// Default cap on flat-mode results.
pub const DEFAULT_LIMIT: usize = 200;

/// Default minimum word length (in characters). Single letters never match.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_min_word_len() -> usize {
    DEFAULT_MIN_WORD_LEN
}

/// Configuration for an [`AnagramEngine`](super::AnagramEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of words returned in flat mode.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Shortest word (in characters) that counts as a match.
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Filter the dictionary on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
    /// Letters that survive normalization.
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Regex whose matches are deleted from the input before the `alphabet`
    /// filter runs, e.g. `\s`.
    #[serde(default)]
    pub strip_pattern: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            parallel: false,
            alphabet: Alphabet::default(),
            strip_pattern: None,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(LetterbankError::invalid_config("limit must be at least 1"));
        }
        if self.min_word_len == 0 {
            return Err(LetterbankError::invalid_config(
                "min_word_len must be at least 1",
            ));
        }
        self.alphabet.validate()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
