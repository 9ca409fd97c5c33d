use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::registry::{Registry, DEFAULT_ROLE};

/// Engine configuration loaded from environment variables.
/// Every variable is optional; defaults reproduce the built-in behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub question_bank_path: Option<PathBuf>,
    pub default_role: String,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_bank_path: None,
            default_role: DEFAULT_ROLE.to_string(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Config {
            question_bank_path: var("QUESTION_BANK_PATH").map(PathBuf::from),
            default_role: var("DEFAULT_ROLE").unwrap_or(defaults.default_role),
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Loads the configured bank, or the built-in one when no path is set.
    pub fn load_registry(&self) -> Result<Registry> {
        let registry = match &self.question_bank_path {
            Some(path) => Registry::from_json_file(path)
                .with_context(|| format!("Failed to load question bank '{}'", path.display()))?,
            None => Registry::builtin().context("Built-in question bank is invalid")?,
        };
        info!(
            "Question bank ready: {} questions, default role '{}'",
            registry.question_total(),
            self.default_role
        );
        Ok(registry.with_default_role(self.default_role.clone()))
    }
}
