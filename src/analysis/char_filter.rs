//! Char filter implementations for text normalization.
//!
//! Char filters turn raw user text into the "letters-only" string that the
//! letter bank is built from.
//!
//! # Available Filters
//!
//! - [`alphabet::AlphabetCharFilter`] - keeps only the letters of an [`Alphabet`](crate::alphabet::Alphabet)
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use letterbank::alphabet::Alphabet;
//! use letterbank::analysis::char_filter::CharFilter;
//! use letterbank::analysis::char_filter::alphabet::AlphabetCharFilter;
//!
//! let filter = AlphabetCharFilter::new(Alphabet::hebrew());
//! assert_eq!(filter.filter("אב, גד!"), "אבגד");
//! ```

/// Trait for character filters that transform text before matching.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod alphabet;
pub mod pattern_replace;
