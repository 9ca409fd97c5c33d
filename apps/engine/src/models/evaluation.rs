use serde::{Deserialize, Serialize};

use crate::models::mode::InterviewMode;

/// Unified evaluation record for one (question, response, mode) triple.
///
/// `score` is on 0–100. The ten universal metrics are on 0–10, except where a
/// mode evaluator supplies its own value for the same key (HR derives
/// `confidence_level` from its 0–100 score), in which case the mode value wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub mode: InterviewMode,
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords_found: Vec<String>,
    /// Fraction of expected keywords found, 0.0 – 1.0.
    pub keyword_score: f64,
    /// Seconds spent answering. The engine leaves it at 0 for the caller to fill.
    pub time_used: u32,
    pub emotional_intelligence: f64,
    pub cultural_fit: f64,
    pub communication_clarity: f64,
    pub technical_depth: f64,
    pub problem_solving: f64,
    pub confidence_level: f64,
    pub specificity: f64,
    pub relevance: f64,
    pub leadership_potential: f64,
    pub innovation_creativity: f64,
    pub stress_management: f64,
    pub adaptability: f64,
}
