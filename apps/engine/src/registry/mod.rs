//! Question/mode registry — per-mode, per-role question banks plus mode configuration.
//!
//! Built once at startup (embedded bank or a JSON file) and treated as immutable.
//! Use [`SharedRegistry`] when the bank must be swapped at runtime.

mod shared;

pub use shared::SharedRegistry;

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::EngineError;
use crate::models::mode::{InterviewMode, ModeConfig};
use crate::models::question::{DifficultyFilter, Question};

pub const DEFAULT_ROLE: &str = "Software Engineer";

const BUILTIN_BANK: &str = include_str!("../../data/question_bank.json");

/// Role name → questions for that role.
pub type RoleBank = BTreeMap<String, Vec<Question>>;

/// One row of [`Registry::list_modes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSummary {
    pub mode: InterviewMode,
    #[serde(flatten)]
    pub config: ModeConfig,
}

#[derive(Debug, Clone)]
pub struct Registry {
    banks: BTreeMap<InterviewMode, RoleBank>,
    configs: BTreeMap<InterviewMode, ModeConfig>,
    default_role: String,
}

impl Registry {
    /// Registry over the embedded reference bank.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_json_str(BUILTIN_BANK)
    }

    /// Parses a bank shaped `{ "<mode>": { "<role>": [question, ...] } }`.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let raw: BTreeMap<String, RoleBank> = serde_json::from_str(json)?;

        let mut banks = BTreeMap::new();
        for (key, roles) in raw {
            let mode: InterviewMode = key
                .parse()
                .map_err(|_| EngineError::InvalidQuestionBank(format!("unknown mode key '{key}'")))?;
            banks.insert(mode, roles);
        }

        Ok(Self::from_banks(banks))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json_str(&json)?;
        info!(
            "Loaded question bank from {} ({} questions)",
            path.display(),
            registry.question_total()
        );
        Ok(registry)
    }

    pub fn from_banks(banks: BTreeMap<InterviewMode, RoleBank>) -> Self {
        let configs = InterviewMode::ALL
            .into_iter()
            .map(|mode| (mode, ModeConfig::for_mode(mode)))
            .collect();
        Self {
            banks,
            configs,
            default_role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Role used when a requested role has no bank under a mode.
    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }

    pub fn with_mode_config(mut self, mode: InterviewMode, config: ModeConfig) -> Self {
        self.configs.insert(mode, config);
        self
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    /// Questions for `mode`/`role`, filtered by difficulty, shuffled and truncated.
    ///
    /// `difficulty` is `"all"`, `"easy"`, `"medium"` or `"hard"`; any other value
    /// matches nothing. `count` defaults to the mode's configured question count.
    pub fn get_questions(
        &self,
        mode: &str,
        role: &str,
        difficulty: &str,
        count: Option<usize>,
    ) -> Result<Vec<Question>, EngineError> {
        self.get_questions_with_rng(mode, role, difficulty, count, &mut rand::thread_rng())
    }

    pub fn get_questions_with_rng<R: Rng + ?Sized>(
        &self,
        mode: &str,
        role: &str,
        difficulty: &str,
        count: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<Question>, EngineError> {
        let mode: InterviewMode = mode.parse()?;

        let Some(filter) = DifficultyFilter::parse(difficulty) else {
            warn!(%mode, role, difficulty, "Unknown difficulty — no questions match");
            return Ok(Vec::new());
        };

        let questions = self.select(mode, role, filter, count, rng);
        if questions.is_empty() {
            warn!(
                %mode,
                role,
                difficulty,
                "No questions available for this configuration"
            );
        }
        Ok(questions)
    }

    /// Typed retrieval used by [`Registry::get_questions_with_rng`].
    pub fn select<R: Rng + ?Sized>(
        &self,
        mode: InterviewMode,
        role: &str,
        filter: DifficultyFilter,
        count: Option<usize>,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut pool: Vec<Question> = self
            .role_bank(mode, role)
            .iter()
            .filter(|q| filter.matches(q.difficulty))
            .cloned()
            .collect();

        pool.shuffle(rng);

        let limit = count.unwrap_or_else(|| self.mode_config(mode).question_count);
        pool.truncate(limit);
        pool
    }

    fn role_bank(&self, mode: InterviewMode, role: &str) -> &[Question] {
        let Some(roles) = self.banks.get(&mode) else {
            return &[];
        };
        roles
            .get(role)
            .or_else(|| roles.get(&self.default_role))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Config lookup by wire tag. Unknown modes get an empty default config.
    pub fn get_mode_config(&self, mode: &str) -> ModeConfig {
        mode.parse::<InterviewMode>()
            .map(|m| self.mode_config(m))
            .unwrap_or_default()
    }

    pub fn mode_config(&self, mode: InterviewMode) -> ModeConfig {
        self.configs.get(&mode).cloned().unwrap_or_default()
    }

    /// Every mode with its configuration, in fixed mode order.
    pub fn list_modes(&self) -> Vec<ModeSummary> {
        InterviewMode::ALL
            .into_iter()
            .map(|mode| ModeSummary {
                mode,
                config: self.mode_config(mode),
            })
            .collect()
    }

    /// Roles with a question bank under `mode`.
    pub fn roles(&self, mode: InterviewMode) -> Vec<&str> {
        self.banks
            .get(&mode)
            .map(|roles| roles.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn question_total(&self) -> usize {
        self.banks
            .values()
            .flat_map(|roles| roles.values())
            .map(Vec::len)
            .sum()
    }
}
