//! Mode-specific evaluators.
//!
//! Each evaluator seeds its running score with `keyword_score * weight`, then
//! adds fixed points for each cue it detects (or a smaller consolation amount
//! when the cue is missing, paired with an improvement suggestion).

mod behavioral;
mod case_study;
mod hr;
mod puzzle;
mod system_design;
mod technical;

pub use behavioral::BehavioralEvaluator;
pub use case_study::CaseStudyEvaluator;
pub use hr::HrEvaluator;
pub use puzzle::PuzzleEvaluator;
pub use system_design::SystemDesignEvaluator;
pub use technical::TechnicalEvaluator;

use crate::models::mode::InterviewMode;
use crate::models::question::Question;

pub const MODE_SCORE_MAX: f64 = 100.0;

/// Inputs shared by every mode evaluator.
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    pub question: &'a Question,
    /// The response, already lowercased.
    pub text: &'a str,
    /// Fraction of expected keywords found, 0.0 – 1.0.
    pub keyword_score: f64,
}

/// Values a mode supplies for keys that also exist in the universal block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricOverrides {
    pub technical_depth: Option<f64>,
    pub problem_solving: Option<f64>,
    pub confidence_level: Option<f64>,
}

/// Output of a mode evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeAssessment {
    /// Clamped to 0 – 100.
    pub score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub overrides: MetricOverrides,
}

/// A scoring rule set for one interview mode.
pub trait ModeEvaluator: Send + Sync {
    fn mode(&self) -> InterviewMode;

    /// Share of the score carried by the keyword ratio.
    fn keyword_weight(&self) -> f64;

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment;
}

/// Returns the evaluator for a mode.
pub fn evaluator_for(mode: InterviewMode) -> &'static dyn ModeEvaluator {
    match mode {
        InterviewMode::Hr => &HrEvaluator,
        InterviewMode::Technical => &TechnicalEvaluator,
        InterviewMode::Puzzle => &PuzzleEvaluator,
        InterviewMode::CaseStudy => &CaseStudyEvaluator,
        InterviewMode::Behavioral => &BehavioralEvaluator,
        InterviewMode::SystemDesign => &SystemDesignEvaluator,
    }
}

/// Running score with the strengths and improvements collected so far.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScoreSheet {
    score: f64,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl ScoreSheet {
    pub fn seeded(keyword_score: f64, weight: f64) -> Self {
        Self {
            score: keyword_score * weight,
            ..Self::default()
        }
    }

    pub fn add(&mut self, points: f64) {
        self.score += points;
    }

    pub fn strength(&mut self, points: f64, note: &str) {
        self.score += points;
        self.strengths.push(note.to_string());
    }

    pub fn improvement(&mut self, points: f64, note: &str) {
        self.score += points;
        self.improvements.push(note.to_string());
    }

    /// Binary cue: `hit_points` + strength when present, `miss_points` + improvement otherwise.
    pub fn cue(
        &mut self,
        present: bool,
        (hit_points, strength): (f64, &str),
        (miss_points, improvement): (f64, &str),
    ) {
        if present {
            self.strength(hit_points, strength);
        } else {
            self.improvement(miss_points, improvement);
        }
    }

    /// Unclamped running score.
    pub fn raw(&self) -> f64 {
        self.score
    }

    pub fn finish(self, overrides: MetricOverrides) -> ModeAssessment {
        ModeAssessment {
            score: self.score.clamp(0.0, MODE_SCORE_MAX),
            strengths: self.strengths,
            improvements: self.improvements,
            overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_for_covers_every_mode() {
        for mode in InterviewMode::ALL {
            assert_eq!(evaluator_for(mode).mode(), mode);
        }
    }

    #[test]
    fn test_keyword_weights() {
        let weights: Vec<f64> = InterviewMode::ALL
            .iter()
            .map(|m| evaluator_for(*m).keyword_weight())
            .collect();
        assert_eq!(weights, vec![30.0, 50.0, 30.0, 40.0, 35.0, 40.0]);
    }

    #[test]
    fn test_score_sheet_clamps_on_finish() {
        let mut sheet = ScoreSheet::seeded(1.0, 50.0);
        sheet.add(80.0);
        assert_eq!(sheet.raw(), 130.0);
        let assessment = sheet.finish(MetricOverrides::default());
        assert_eq!(assessment.score, MODE_SCORE_MAX);
    }

    #[test]
    fn test_cue_records_strength_or_improvement() {
        let mut sheet = ScoreSheet::seeded(0.0, 30.0);
        sheet.cue(true, (15.0, "good"), (5.0, "bad"));
        sheet.cue(false, (15.0, "good"), (5.0, "bad"));
        let assessment = sheet.finish(MetricOverrides::default());
        assert_eq!(assessment.score, 20.0);
        assert_eq!(assessment.strengths, vec!["good"]);
        assert_eq!(assessment.improvements, vec!["bad"]);
    }

    #[test]
    fn test_empty_response_stays_in_bounds_for_all_modes() {
        let question = Question::new("Explain caching.", "technical", &["cache"]);
        for mode in InterviewMode::ALL {
            let ctx = ResponseContext {
                question: &question,
                text: "",
                keyword_score: 0.0,
            };
            let assessment = evaluator_for(mode).evaluate(&ctx);
            assert!(
                (0.0..=MODE_SCORE_MAX).contains(&assessment.score),
                "{mode} score {}",
                assessment.score
            );
        }
    }
}
