//! Evaluation orchestrator — keyword match, mode dispatch, universal metrics, merge.
//!
//! Merge rule: universal metrics fill the record first; any value a mode
//! evaluator supplies for the same key replaces it.

pub mod feedback;
pub mod keywords;
pub mod modes;
pub mod signals;
pub mod universal;

use tracing::debug;

use crate::errors::EngineError;
use crate::models::evaluation::EvaluationResult;
use crate::models::mode::InterviewMode;
use crate::models::question::Question;
use feedback::compose_feedback;
use keywords::match_keywords;
use modes::{evaluator_for, ResponseContext};
use universal::UniversalMetrics;

/// Evaluates a response for a mode given by its wire tag.
pub fn evaluate_response(
    question: &Question,
    response: &str,
    mode: &str,
) -> Result<EvaluationResult, EngineError> {
    let mode: InterviewMode = mode.parse()?;
    Ok(evaluate(question, response, mode))
}

/// Evaluates a response for a known mode. Pure and infallible.
pub fn evaluate(question: &Question, response: &str, mode: InterviewMode) -> EvaluationResult {
    let text = response.to_lowercase();
    let keywords = match_keywords(&text, &question.expected_keywords);

    let ctx = ResponseContext {
        question,
        text: &text,
        keyword_score: keywords.score,
    };
    let assessment = evaluator_for(mode).evaluate(&ctx);
    let universal = UniversalMetrics::from_lowered(&text, question);

    let feedback = compose_feedback(
        mode,
        assessment.score,
        &assessment.strengths,
        &assessment.improvements,
    );

    debug!(
        mode = %mode,
        score = assessment.score,
        keyword_score = keywords.score,
        keywords_found = keywords.found.len(),
        "response evaluated"
    );

    let overrides = assessment.overrides;
    EvaluationResult {
        mode,
        score: assessment.score,
        feedback,
        strengths: assessment.strengths,
        improvements: assessment.improvements,
        keywords_found: keywords.found,
        keyword_score: keywords.score,
        time_used: 0,
        emotional_intelligence: universal.emotional_intelligence,
        cultural_fit: universal.cultural_fit,
        communication_clarity: universal.communication_clarity,
        technical_depth: overrides.technical_depth.unwrap_or(0.0),
        problem_solving: overrides.problem_solving.unwrap_or(0.0),
        confidence_level: overrides
            .confidence_level
            .unwrap_or(universal.confidence_level),
        specificity: universal.specificity,
        relevance: universal.relevance,
        leadership_potential: universal.leadership_potential,
        innovation_creativity: universal.innovation_creativity,
        stress_management: universal.stress_management,
        adaptability: universal.adaptability,
    }
}
