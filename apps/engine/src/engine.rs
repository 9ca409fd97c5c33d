//! The engine facade: the two operations exposed to callers, over an injected registry.

use std::sync::Arc;

use crate::errors::EngineError;
use crate::evaluation;
use crate::models::evaluation::EvaluationResult;
use crate::models::mode::ModeConfig;
use crate::models::question::Question;
use crate::registry::{ModeSummary, Registry, SharedRegistry};

/// Stateless between calls; safe to share behind `Arc` across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: SharedRegistry,
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: SharedRegistry::new(registry),
        }
    }

    pub fn with_shared(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Snapshot of the registry currently in use.
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.snapshot()
    }

    /// Swaps in a new question bank for subsequent calls.
    pub fn reload(&self, registry: Registry) {
        self.registry.replace(registry);
    }

    pub fn get_interview_questions(
        &self,
        mode: &str,
        role: &str,
        difficulty: &str,
        count: Option<usize>,
    ) -> Result<Vec<Question>, EngineError> {
        self.registry
            .snapshot()
            .get_questions(mode, role, difficulty, count)
    }

    pub fn evaluate_response(
        &self,
        question: &Question,
        response: &str,
        mode: &str,
    ) -> Result<EvaluationResult, EngineError> {
        evaluation::evaluate_response(question, response, mode)
    }

    pub fn get_mode_config(&self, mode: &str) -> ModeConfig {
        self.registry.snapshot().get_mode_config(mode)
    }

    pub fn list_modes(&self) -> Vec<ModeSummary> {
        self.registry.snapshot().list_modes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn engine() -> Engine {
        Engine::new(Registry::builtin().unwrap())
    }

    #[test]
    fn test_questions_then_evaluate_round() {
        let engine = engine();
        let questions = engine
            .get_interview_questions("behavioral", "Data Scientist", "medium", Some(2))
            .unwrap();
        assert_eq!(questions.len(), 2);

        let result = engine
            .evaluate_response(
                &questions[0],
                "In that situation my task was clear; the action I took led to a good result.",
                "behavioral",
            )
            .unwrap();
        assert!(result.score > 60.0, "Got {}", result.score);
    }

    #[test]
    fn test_both_operations_gate_on_mode() {
        let engine = engine();
        assert!(matches!(
            engine.get_interview_questions("bogus", "Software Engineer", "medium", None),
            Err(EngineError::UnsupportedMode(_))
        ));
        let q = Question::new("Q", "t", &[]);
        assert!(matches!(
            engine.evaluate_response(&q, "answer", "bogus"),
            Err(EngineError::UnsupportedMode(_))
        ));
    }

    #[test]
    fn test_reload_swaps_question_bank() {
        let engine = engine();
        engine.reload(Registry::from_banks(BTreeMap::new()));
        let questions = engine
            .get_interview_questions("hr", "Software Engineer", "all", None)
            .unwrap();
        assert!(questions.is_empty());
        assert_eq!(engine.get_mode_config("hr").question_count, 5);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
