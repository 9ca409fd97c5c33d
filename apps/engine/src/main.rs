use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interview_engine::config::Config;
use interview_engine::scorer::{ResponseScorer, RuleBasedScorer, ScoreRequest};
use interview_engine::{Engine, Question};

#[derive(Parser)]
#[command(name = "interview-engine", version, about = "Mock interview question and scoring engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List interview modes with their configuration
    Modes,
    /// Draw a shuffled question set for a mode and role
    Questions {
        #[arg(long)]
        mode: String,
        #[arg(long)]
        role: Option<String>,
        /// easy, medium, hard or all
        #[arg(long, default_value = "medium")]
        difficulty: String,
        #[arg(long)]
        count: Option<usize>,
    },
    /// Score a response (read from stdin unless --response is given)
    Evaluate {
        #[arg(long)]
        mode: String,
        /// JSON file holding the question being answered
        #[arg(long)]
        question: Option<PathBuf>,
        #[arg(long)]
        response: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // stdout carries the JSON output; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = Arc::new(Engine::new(config.load_registry()?));
    info!("Interview engine v{} ready", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Modes => print_json(&engine.list_modes()),
        Command::Questions {
            mode,
            role,
            difficulty,
            count,
        } => {
            let role = role.unwrap_or_else(|| config.default_role.clone());
            let questions = engine.get_interview_questions(&mode, &role, &difficulty, count)?;
            print_json(&questions)
        }
        Command::Evaluate {
            mode,
            question,
            response,
            role,
        } => {
            let question = match question {
                Some(path) => load_question(&path)?,
                None => Question::default(),
            };
            let response = match response {
                Some(text) => text,
                None => read_response(std::io::stdin())?,
            };
            let role = role.unwrap_or_else(|| config.default_role.clone());

            let scorer = RuleBasedScorer::new(engine.clone());
            let scored = scorer
                .score(ScoreRequest {
                    question: &question,
                    response: &response,
                    mode: &mode,
                    role: &role,
                })
                .await?;
            print_json(&scored)
        }
    }
}

fn load_question(path: &Path) -> Result<Question> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read question file '{}'", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Question file '{}' is not a valid question", path.display()))
}

/// Reads the whole response. A blank response is valid input and simply scores low.
fn read_response(mut input: impl Read) -> Result<String> {
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .context("Failed to read response from stdin")?;
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
