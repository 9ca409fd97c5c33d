//! Keyword matching of a response against a question's expected keywords.

use serde::{Deserialize, Serialize};

/// Expected keywords found in a response, plus the found/expected ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// In question order; each element is one of the expected keywords verbatim.
    pub found: Vec<String>,
    /// 0.0 – 1.0; 0.0 when the question defines no keywords.
    pub score: f64,
}

/// Matches keywords case-insensitively as substrings of the already-lowercased response.
pub fn match_keywords(text: &str, expected: &[String]) -> KeywordMatch {
    if expected.is_empty() {
        return KeywordMatch::default();
    }

    let found: Vec<String> = expected
        .iter()
        .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
        .cloned()
        .collect();

    let score = found.len() as f64 / expected.len() as f64;
    KeywordMatch { found, score }
}
