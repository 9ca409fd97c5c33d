use super::{MetricOverrides, ModeAssessment, ModeEvaluator, ResponseContext, ScoreSheet};
use crate::evaluation::signals::{contains_any, count_present, word_count};
use crate::models::mode::InterviewMode;

const LOGICAL_CONNECTIVES: &[&str] = &["if", "then", "because", "therefore", "since", "assume"];
const STEPS: &[&str] = &["step", "first", "second", "finally"];
const ALTERNATIVES: &[&str] = &["alternative", "another", "different", "approach"];
const THOROUGH_WORDS: usize = 30;

/// Puzzle mode: logical connectives, stepwise reasoning, alternative approaches, thoroughness.
pub struct PuzzleEvaluator;

impl ModeEvaluator for PuzzleEvaluator {
    fn mode(&self) -> InterviewMode {
        InterviewMode::Puzzle
    }

    fn keyword_weight(&self) -> f64 {
        30.0
    }

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment {
        let text = ctx.text;
        let mut sheet = ScoreSheet::seeded(ctx.keyword_score, self.keyword_weight());

        sheet.add(count_present(text, LOGICAL_CONNECTIVES) as f64 * 8.0);

        sheet.cue(
            contains_any(text, STEPS),
            (20.0, "Shows systematic thinking"),
            (5.0, "Break down the problem into steps"),
        );
        sheet.cue(
            contains_any(text, ALTERNATIVES),
            (15.0, "Shows creative thinking"),
            (5.0, "Consider multiple approaches"),
        );
        sheet.cue(
            word_count(text) > THOROUGH_WORDS,
            (15.0, "Shows thorough analysis"),
            (5.0, "Provide more detailed analysis"),
        );

        sheet.finish(MetricOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Question;

    fn assess(response: &str) -> ModeAssessment {
        let q = Question::new(
            "You have 8 balls, 7 weigh the same, 1 is heavier.",
            "logic",
            &[],
        );
        let text = response.to_lowercase();
        PuzzleEvaluator.evaluate(&ResponseContext {
            question: &q,
            text: &text,
            keyword_score: 0.0,
        })
    }

    #[test]
    fn test_empty_response() {
        let a = assess("");
        assert_eq!(a.score, 15.0);
        assert_eq!(a.improvements.len(), 3);
    }

    #[test]
    fn test_logical_connectives_counted_once_each() {
        // "if" x2 and "because" x1 -> two distinct connectives
        let a = assess("if if because");
        assert!((a.score - (16.0 + 15.0)).abs() < 1e-9, "Got {}", a.score);
    }

    #[test]
    fn test_full_marks_for_structured_reasoning() {
        let response = "First step: split the balls into groups of three. If the pans balance, \
            then the heavy ball is in the remaining two, because the scale only tips for weight. \
            Therefore one more weighing is enough since we assume a single heavy ball. \
            Another approach would weigh four against four.";
        let a = assess(response);
        // 6 connectives * 8 + 20 + 15 + 15 = 98
        assert!((a.score - 98.0).abs() < 1e-9, "Got {}", a.score);
        assert!(a.improvements.is_empty());
        assert_eq!(a.strengths.len(), 3);
    }
}
