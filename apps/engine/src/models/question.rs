use serde::{Deserialize, Serialize};

/// Question difficulty. Banks that omit it are treated as `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Difficulty selector for question retrieval. `"all"` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyFilter {
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Parses a request string. Returns `None` for values that can match no question.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "easy" => Some(Self::Only(Difficulty::Easy)),
            "medium" => Some(Self::Only(Difficulty::Medium)),
            "hard" => Some(Self::Only(Difficulty::Hard)),
            _ => None,
        }
    }

    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }
}

impl Default for DifficultyFilter {
    fn default() -> Self {
        Self::Only(Difficulty::Medium)
    }
}

/// A single interview question as drawn from the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "question")]
    pub text: String,
    /// Category tag, e.g. "opening", "technical", "logic".
    #[serde(rename = "type", default)]
    pub question_type: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Lowercase literals matched as substrings of the response.
    #[serde(default)]
    pub expected_keywords: Vec<String>,
    /// Analysis points for case studies; advisory only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_analysis: Vec<String>,
    /// Seconds. Advisory; the engine never enforces it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Question {
    /// Minimal question with text, type and expected keywords.
    pub fn new(text: impl Into<String>, question_type: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            text: text.into(),
            question_type: question_type.into(),
            difficulty: Difficulty::default(),
            expected_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            expected_analysis: Vec::new(),
            time_limit: None,
            scenario: None,
            solution: None,
            hints: Vec::new(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_difficulty_defaults_to_medium() {
        let q: Question = serde_json::from_str(
            r#"{"question": "Where do you see yourself in 5 years?", "type": "career_goals"}"#,
        )
        .unwrap();
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert!(q.expected_keywords.is_empty());
        assert_eq!(q.text, "Where do you see yourself in 5 years?");
    }

    #[test]
    fn test_serializes_text_and_type_fields() {
        let q = Question::new("Explain DI.", "technical", &["di"]);
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["text"], "Explain DI.");
        assert_eq!(value["type"], "technical");
        assert_eq!(value["difficulty"], "medium");
        assert!(value.get("hints").is_none(), "empty hints are skipped");
    }

    #[test]
    fn test_difficulty_filter_parse() {
        assert_eq!(DifficultyFilter::parse("all"), Some(DifficultyFilter::All));
        assert_eq!(
            DifficultyFilter::parse("hard"),
            Some(DifficultyFilter::Only(Difficulty::Hard))
        );
        assert_eq!(DifficultyFilter::parse("extreme"), None);
    }

    #[test]
    fn test_difficulty_filter_matches() {
        assert!(DifficultyFilter::All.matches(Difficulty::Easy));
        assert!(DifficultyFilter::default().matches(Difficulty::Medium));
        assert!(!DifficultyFilter::Only(Difficulty::Hard).matches(Difficulty::Medium));
    }
}
