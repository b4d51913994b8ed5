use regex::Regex;

use super::CharFilter;
use crate::error::{LetterbankError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// With an empty replacement this strips unwanted text, e.g. `[^א-ת]` or
/// `\s`, before the alphabet filter runs.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| {
                LetterbankError::analysis(format!("invalid pattern '{pattern}': {e}"))
            })?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes every match of `pattern`.
    pub fn remove(pattern: &str) -> Result<Self> {
        Self::new(pattern, "")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_non_hebrew() {
        let filter = PatternReplaceCharFilter::remove("[^א-ת]").unwrap();
        assert_eq!(filter.filter("אבא, hello 12 גג"), "אבאגג");
        assert_eq!(filter.pattern(), "[^א-ת]");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternReplaceCharFilter::new("[unclosed", "");
        match result {
            Err(LetterbankError::Analysis(msg)) => assert!(msg.contains("[unclosed")),
            other => panic!("Expected analysis error, got {other:?}"),
        }
    }
}
