//! Mock-interview response evaluation engine.
//!
//! Serves mode/role question sets from a [`Registry`] and scores free-text
//! answers with deterministic keyword and indicator heuristics.

pub mod config;
pub mod engine;
pub mod errors;
pub mod evaluation;
pub mod llm_client;
pub mod models;
pub mod registry;
pub mod scorer;

pub use engine::Engine;
pub use errors::EngineError;
pub use models::evaluation::EvaluationResult;
pub use models::mode::{InterviewMode, ModeConfig};
pub use models::question::Question;
pub use registry::{Registry, SharedRegistry};
