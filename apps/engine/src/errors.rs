use thiserror::Error;

/// Engine-level error type.
/// Evaluation itself never fails for a known mode; these cover mode gating and bank loading.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Interview mode '{0}' not supported")]
    UnsupportedMode(String),

    #[error("Invalid question bank: {0}")]
    InvalidQuestionBank(String),

    #[error("Question bank JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Short machine-readable code, mirrored in CLI error output.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnsupportedMode(_) => "UNSUPPORTED_MODE",
            EngineError::InvalidQuestionBank(_) => "INVALID_QUESTION_BANK",
            EngineError::Json(_) => "INVALID_QUESTION_BANK",
            EngineError::Io(_) => "IO_ERROR",
        }
    }
}
