use super::{MetricOverrides, ModeAssessment, ModeEvaluator, ResponseContext, ScoreSheet};
use crate::evaluation::signals::{contains_any, count_present};
use crate::models::mode::InterviewMode;

const BUSINESS_TERMS: &[&str] = &["impact", "revenue", "cost", "efficiency", "scalability", "market"];
const ANALYSIS_FRAME: &[&str] = &["problem", "solution", "impact", "recommendation"];
const QUANTITATIVE: &[&str] = &["percentage", "number", "increase", "decrease", "metric"];
const ACTIONABLE: &[&str] = &["recommend", "suggest", "implement", "action"];

/// Case-study mode: business vocabulary, framed analysis, numbers, and concrete next steps.
pub struct CaseStudyEvaluator;

impl ModeEvaluator for CaseStudyEvaluator {
    fn mode(&self) -> InterviewMode {
        InterviewMode::CaseStudy
    }

    fn keyword_weight(&self) -> f64 {
        40.0
    }

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment {
        let text = ctx.text;
        let mut sheet = ScoreSheet::seeded(ctx.keyword_score, self.keyword_weight());

        sheet.add(count_present(text, BUSINESS_TERMS) as f64 * 8.0);

        sheet.cue(
            contains_any(text, ANALYSIS_FRAME),
            (20.0, "Well-structured analysis"),
            (5.0, "Structure your analysis clearly"),
        );
        sheet.cue(
            contains_any(text, QUANTITATIVE),
            (15.0, "Shows quantitative thinking"),
            (5.0, "Include quantitative analysis"),
        );
        sheet.cue(
            contains_any(text, ACTIONABLE),
            (15.0, "Provides actionable recommendations"),
            (5.0, "Provide specific recommendations"),
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
            "A social media platform is experiencing slow response times during peak hours.",
            "performance",
            &[],
        );
        let text = response.to_lowercase();
        CaseStudyEvaluator.evaluate(&ResponseContext {
            question: &q,
            text: &text,
            keyword_score: 0.0,
        })
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(assess("").score, 15.0);
    }

    #[test]
    fn test_business_answer() {
        let a = assess(
            "The problem hurts revenue and cost. I recommend a cache, which should decrease p99 latency.",
        );
        // 2 terms * 8 + 20 + 15 + 15
        assert!((a.score - 66.0).abs() < 1e-9, "Got {}", a.score);
        assert_eq!(
            a.strengths,
            vec![
                "Well-structured analysis",
                "Shows quantitative thinking",
                "Provides actionable recommendations"
            ]
        );
    }

    #[test]
    fn test_missing_recommendations_flagged() {
        let a = assess("the market is large");
        assert!(a
            .improvements
            .contains(&"Provide specific recommendations".to_string()));
        assert!((a.score - 23.0).abs() < 1e-9, "Got {}", a.score);
    }
}
