use super::{MetricOverrides, ModeAssessment, ModeEvaluator, ResponseContext, ScoreSheet};
use crate::evaluation::signals::{contains_any, count_present};
use crate::models::mode::InterviewMode;

const TECHNICAL_TERMS: &[&str] = &["algorithm", "complexity", "optimization", "architecture", "scaling"];
const EXAMPLES: &[&str] = &["example", "instance", "case", "scenario"];

/// Technical mode: keyword accuracy, depth of terminology, ordered explanation, examples.
pub struct TechnicalEvaluator;

impl ModeEvaluator for TechnicalEvaluator {
    fn mode(&self) -> InterviewMode {
        InterviewMode::Technical
    }

    fn keyword_weight(&self) -> f64 {
        50.0
    }

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment {
        let text = ctx.text;
        let mut sheet = ScoreSheet::seeded(ctx.keyword_score, self.keyword_weight());

        sheet.add(count_present(text, TECHNICAL_TERMS) as f64 * 10.0);

        sheet.cue(
            text.contains("first") && text.contains("then"),
            (15.0, "Well-structured response"),
            (5.0, "Structure your response with clear steps"),
        );
        sheet.cue(
            contains_any(text, EXAMPLES),
            (15.0, "Good use of examples"),
            (5.0, "Provide concrete examples"),
        );

        sheet.finish(MetricOverrides::default())
    }
}
