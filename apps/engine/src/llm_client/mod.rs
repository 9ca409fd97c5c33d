//! LLM collaborator seam — the only way the engine talks to a language model.
//!
//! The transport (vendor SDK, HTTP client, retries) lives with the caller, who
//! implements [`LlmCollaborator`]. This module owns the prompt, the reply
//! parsing, and the feedback shape.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Collaborator error: {0}")]
    Collaborator(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM reply contained no JSON object")]
    NoJson,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// External language model invoked with a system prompt and a user prompt.
#[async_trait]
pub trait LlmCollaborator: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Calls the collaborator and deserializes the JSON object in its reply.
/// The prompt must instruct the model to return JSON.
pub async fn complete_json<T: DeserializeOwned>(
    llm: &dyn LlmCollaborator,
    system: &str,
    prompt: &str,
) -> Result<T, LlmError> {
    let reply = llm.complete(system, prompt).await?;
    if reply.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    debug!("LLM reply received ({} chars)", reply.len());

    let json = extract_json_object(&reply).ok_or(LlmError::NoJson)?;
    serde_json::from_str(json).map_err(LlmError::Parse)
}

/// Per-response analysis returned by the collaborator.
/// Scores are on 1 – 10 except `confidence` (0 – 1); absent fields default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmFeedback {
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub confidence: f64,
    pub emotional_intelligence: f64,
    pub cultural_fit: f64,
    pub communication_clarity: f64,
    pub technical_depth: f64,
    pub problem_solving: f64,
    pub confidence_level: f64,
    pub specificity: f64,
    pub relevance: f64,
}

impl LlmFeedback {
    /// Clamps every score into its documented range.
    pub fn normalized(mut self) -> Self {
        for value in [
            &mut self.score,
            &mut self.emotional_intelligence,
            &mut self.cultural_fit,
            &mut self.communication_clarity,
            &mut self.technical_depth,
            &mut self.problem_solving,
            &mut self.confidence_level,
            &mut self.specificity,
            &mut self.relevance,
        ] {
            *value = value.clamp(0.0, 10.0);
        }
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// The span from the first `{` to the last `}` once fences are removed.
fn extract_json_object(text: &str) -> Option<&str> {
    let text = strip_json_fences(text);
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
