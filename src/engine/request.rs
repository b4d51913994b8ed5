//! Search request types.

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_LIMIT;

/// Shape of the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchMode {
    /// One list ordered by descending length then lexicographically, capped at `limit`.
    Flat { limit: usize },
    /// Every match, partitioned by length.
    Grouped,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Flat {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A request to find the dictionary words spelled by the letters of `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Raw input; anything outside the alphabet is ignored.
    pub text: String,
    #[serde(default)]
    pub mode: MatchMode,
}

impl MatchRequest {
    pub fn flat<S: Into<String>>(text: S, limit: usize) -> Self {
        Self {
            text: text.into(),
            mode: MatchMode::Flat { limit },
        }
    }

    pub fn grouped<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            mode: MatchMode::Grouped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_flat_200() {
        assert_eq!(MatchMode::default(), MatchMode::Flat { limit: 200 });
        assert_eq!(MatchRequest::default().mode, MatchMode::Flat { limit: 200 });
    }

    #[test]
    fn test_deserialize_request() {
        let request: MatchRequest =
            serde_json::from_str(r#"{"text": "שלום", "mode": {"type": "grouped"}}"#).unwrap();
        assert_eq!(request, MatchRequest::grouped("שלום"));

        let request: MatchRequest = serde_json::from_str(r#"{"text": "abc"}"#).unwrap();
        assert_eq!(request, MatchRequest::flat("abc", 200));
    }
}
