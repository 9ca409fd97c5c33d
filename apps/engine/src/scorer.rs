//! Scorer backends — pluggable, trait-based entry point for scoring one response.
//!
//! Default: `RuleBasedScorer` (the engine alone, deterministic).
//! `LlmAssistedScorer` additionally asks an injected LLM collaborator and falls
//! back to rules-only output when the collaborator fails.
//!
//! Callers hold an `Arc<dyn ResponseScorer>` and swap backends at startup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::Engine;
use crate::errors::EngineError;
use crate::llm_client::prompts::{build_response_analysis_prompt, RESPONSE_ANALYSIS_SYSTEM};
use crate::llm_client::{complete_json, LlmCollaborator, LlmFeedback};
use crate::models::evaluation::EvaluationResult;
use crate::models::question::Question;

/// One response to score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRequest<'a> {
    pub question: &'a Question,
    pub response: &'a str,
    pub mode: &'a str,
    /// Candidate's target role; only the LLM prompt uses it.
    pub role: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerBackend {
    Rules,
    LlmAssisted,
}

/// Rule-based evaluation, plus the collaborator's analysis when one was obtained.
/// Blending the two is left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResponse {
    pub evaluation: EvaluationResult,
    pub llm_feedback: Option<LlmFeedback>,
    pub scorer_backend: ScorerBackend,
    pub analyzed_at: DateTime<Utc>,
}

#[async_trait]
pub trait ResponseScorer: Send + Sync {
    async fn score(&self, request: ScoreRequest<'_>) -> Result<ScoredResponse, EngineError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct RuleBasedScorer {
    engine: Arc<Engine>,
}

impl RuleBasedScorer {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl ResponseScorer for RuleBasedScorer {
    async fn score(&self, request: ScoreRequest<'_>) -> Result<ScoredResponse, EngineError> {
        let evaluation =
            self.engine
                .evaluate_response(request.question, request.response, request.mode)?;
        Ok(ScoredResponse {
            evaluation,
            llm_feedback: None,
            scorer_backend: ScorerBackend::Rules,
            analyzed_at: Utc::now(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAssistedScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAssistedScorer {
    engine: Arc<Engine>,
    llm: Arc<dyn LlmCollaborator>,
}

impl LlmAssistedScorer {
    pub fn new(engine: Arc<Engine>, llm: Arc<dyn LlmCollaborator>) -> Self {
        Self { engine, llm }
    }
}

#[async_trait]
impl ResponseScorer for LlmAssistedScorer {
    async fn score(&self, request: ScoreRequest<'_>) -> Result<ScoredResponse, EngineError> {
        // Mode gating happens before any collaborator call.
        let evaluation =
            self.engine
                .evaluate_response(request.question, request.response, request.mode)?;

        let prompt = build_response_analysis_prompt(
            request.question,
            request.response,
            request.role,
            request.mode,
        );

        let llm_feedback =
            match complete_json::<LlmFeedback>(self.llm.as_ref(), RESPONSE_ANALYSIS_SYSTEM, &prompt)
                .await
            {
                Ok(feedback) => {
                    info!(mode = request.mode, "LLM analysis attached to evaluation");
                    Some(feedback.normalized())
                }
                Err(e) => {
                    warn!("LLM analysis failed, falling back to rule engine: {e}");
                    None
                }
            };

        let scorer_backend = if llm_feedback.is_some() {
            ScorerBackend::LlmAssisted
        } else {
            ScorerBackend::Rules
        };

        Ok(ScoredResponse {
            evaluation,
            llm_feedback,
            scorer_backend,
            analyzed_at: Utc::now(),
        })
    }
}
