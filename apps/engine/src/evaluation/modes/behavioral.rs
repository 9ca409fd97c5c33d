use super::{MetricOverrides, ModeAssessment, ModeEvaluator, ResponseContext, ScoreSheet};
use crate::evaluation::signals::{contains_any, count_present};
use crate::models::mode::InterviewMode;

/// Situation / Task / Action / Result.
const STAR_COMPONENTS: &[&str] = &["situation", "task", "action", "result"];
const DETAILS: &[&str] = &["when", "where", "who", "what", "how"];
const PERSONAL: &[&str] = &["i", "me", "my", "we", "our"];
const OUTCOMES: &[&str] = &["result", "outcome", "learned", "improved", "achieved"];

/// Behavioral mode: STAR coverage, concrete detail, personal ownership, outcomes.
pub struct BehavioralEvaluator;

impl ModeEvaluator for BehavioralEvaluator {
    fn mode(&self) -> InterviewMode {
        InterviewMode::Behavioral
    }

    fn keyword_weight(&self) -> f64 {
        35.0
    }

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment {
        let text = ctx.text;
        let mut sheet = ScoreSheet::seeded(ctx.keyword_score, self.keyword_weight());

        sheet.add(count_present(text, STAR_COMPONENTS) as f64 * 15.0);

        sheet.cue(
            contains_any(text, DETAILS),
            (20.0, "Good use of specific details"),
            (5.0, "Provide specific details about the situation"),
        );
        sheet.cue(
            contains_any(text, PERSONAL),
            (15.0, "Shows personal involvement"),
            (5.0, "Focus on your personal role and actions"),
        );
        sheet.cue(
            contains_any(text, OUTCOMES),
            (15.0, "Shows outcomes and learning"),
            (5.0, "Include the results and what you learned"),
        );

        sheet.finish(MetricOverrides::default())
    }
}
