//! # letterbank
//!
//! Find every dictionary word that can be spelled from the letters of a
//! sentence, using each letter at most as often as it appears.
//!
//! ## Features
//!
//! - Alphabet-agnostic normalization (Hebrew by default)
//! - Multiset letter-bank matching
//! - Ranked, capped word lists or complete length groups
//! - Hot-swappable shared dictionaries
//! - Timestamped text export

pub mod alphabet;
pub mod analysis;
pub mod bank;
pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod export;
pub mod matcher;

pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::bank::{LetterBank, build_bank};
    pub use crate::dictionary::{Dictionary, DictionaryStore};
    pub use crate::engine::{AnagramEngine, EngineConfig, GroupedMatches, MatchOutcome};
    pub use crate::error::{LetterbankError, Result};
    pub use crate::matcher::{deficit, is_valid};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
