//! Feedback composer — classifies a mode score into a tone and renders the summary sentence.

use serde::{Deserialize, Serialize};

use crate::models::mode::InterviewMode;

/// How many strengths / improvements are quoted in the summary.
const MAX_QUOTED: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl FeedbackTone {
    /// ≥85 excellent, ≥70 good, ≥55 fair, otherwise needs improvement.
    pub fn classify(score: f64) -> Self {
        match score {
            s if s >= 85.0 => FeedbackTone::Excellent,
            s if s >= 70.0 => FeedbackTone::Good,
            s if s >= 55.0 => FeedbackTone::Fair,
            _ => FeedbackTone::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackTone::Excellent => "excellent",
            FeedbackTone::Good => "good",
            FeedbackTone::Fair => "fair",
            FeedbackTone::NeedsImprovement => "needs improvement",
        }
    }

    fn recommendation(&self, interview: &str) -> String {
        match self {
            FeedbackTone::Excellent => format!(
                "You're well-prepared for {interview}s. Continue building on your strengths."
            ),
            FeedbackTone::Good => format!(
                "You have solid {interview} skills. Focus on the areas for improvement."
            ),
            FeedbackTone::Fair => format!(
                "You have potential but need to work on several areas to improve your {interview} performance."
            ),
            FeedbackTone::NeedsImprovement => {
                "Significant improvement needed. Focus on the key areas identified.".to_string()
            }
        }
    }
}

/// Builds the prose summary for a mode score, quoting up to three strengths and improvements.
pub fn compose_feedback(
    mode: InterviewMode,
    score: f64,
    strengths: &[String],
    improvements: &[String],
) -> String {
    let interview = mode.interview_label();
    let tone = FeedbackTone::classify(score);

    let mut feedback = format!("Your {interview} response was {}. ", tone.label());

    if !strengths.is_empty() {
        feedback.push_str(&format!(
            "Your strengths include: {}. ",
            quote(strengths)
        ));
    }
    if !improvements.is_empty() {
        feedback.push_str(&format!(
            "Areas for improvement: {}. ",
            quote(improvements)
        ));
    }

    feedback.push_str(&tone.recommendation(interview));
    feedback
}

fn quote(items: &[String]) -> String {
    items
        .iter()
        .take(MAX_QUOTED)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(FeedbackTone::classify(85.0), FeedbackTone::Excellent);
        assert_eq!(FeedbackTone::classify(84.9), FeedbackTone::Good);
        assert_eq!(FeedbackTone::classify(70.0), FeedbackTone::Good);
        assert_eq!(FeedbackTone::classify(55.0), FeedbackTone::Fair);
        assert_eq!(FeedbackTone::classify(54.9), FeedbackTone::NeedsImprovement);
        assert_eq!(FeedbackTone::classify(0.0), FeedbackTone::NeedsImprovement);
    }

    #[test]
    fn test_hr_excellent_feedback_text() {
        let feedback = compose_feedback(InterviewMode::Hr, 90.0, &[], &[]);
        assert_eq!(
            feedback,
            "Your HR interview response was excellent. \
             You're well-prepared for HR interviews. Continue building on your strengths."
        );
    }

    #[test]
    fn test_quotes_at_most_three_items() {
        let strengths: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let feedback = compose_feedback(InterviewMode::Technical, 72.0, &strengths, &[]);
        assert!(feedback.contains("Your strengths include: a, b, c. "));
        assert!(!feedback.contains(", d"));
        assert!(feedback.contains("solid technical interview skills"));
    }

    #[test]
    fn test_low_score_lists_improvements() {
        let improvements = vec!["Provide concrete examples".to_string()];
        let feedback = compose_feedback(InterviewMode::Puzzle, 20.0, &[], &improvements);
        assert!(feedback.starts_with("Your puzzle interview response was needs improvement."));
        assert!(feedback.contains("Areas for improvement: Provide concrete examples. "));
        assert!(feedback.ends_with("Focus on the key areas identified."));
    }
}
