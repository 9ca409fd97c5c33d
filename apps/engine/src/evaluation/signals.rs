//! Literal signal extraction over lowercased text.
//!
//! Every check is a plain substring search: no stemming, no word boundaries.
//! Callers lowercase once and pass the lowered text in.

/// Named category of indicator substrings.
pub type IndicatorGroup = (&'static str, &'static [&'static str]);

/// True if any indicator occurs anywhere in `text`.
pub fn contains_any(text: &str, indicators: &[&str]) -> bool {
    indicators.iter().any(|word| text.contains(word))
}

/// Number of distinct indicators present in `text` (each counted at most once).
pub fn count_present(text: &str, indicators: &[&str]) -> usize {
    indicators.iter().filter(|word| text.contains(*word)).count()
}

/// Total non-overlapping occurrences of every indicator in `text`.
pub fn count_occurrences(text: &str, indicators: &[&str]) -> usize {
    indicators
        .iter()
        .map(|word| text.matches(word).count())
        .sum()
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Any Unicode numeric character counts, not only ASCII `0-9`.
pub fn has_digit(text: &str) -> bool {
    text.chars().any(char::is_numeric)
}

/// Awards `increment` for each group with at least one indicator hit.
pub fn score_groups(text: &str, groups: &[IndicatorGroup], increment: f64) -> f64 {
    groups
        .iter()
        .filter(|(_, indicators)| contains_any(text, indicators))
        .count() as f64
        * increment
}
