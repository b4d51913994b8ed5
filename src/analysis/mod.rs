//! Text analysis module for letterbank.
//!
//! Raw input passes through a [`CharFilter`] that strips it down to the active
//! alphabet before any counting happens.

pub mod char_filter;

// Re-export commonly used types
pub use char_filter::CharFilter;
pub use char_filter::alphabet::{AlphabetCharFilter, normalize};
pub use char_filter::pattern_replace::PatternReplaceCharFilter;
