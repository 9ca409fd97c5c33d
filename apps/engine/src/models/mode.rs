use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// The six fixed interview styles. Wire identifiers are the lowercase tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterviewMode {
    #[serde(rename = "hr")]
    Hr,
    #[serde(rename = "tech")]
    Technical,
    #[serde(rename = "puzzle")]
    Puzzle,
    #[serde(rename = "case_study")]
    CaseStudy,
    #[serde(rename = "behavioral")]
    Behavioral,
    #[serde(rename = "system_design")]
    SystemDesign,
}

impl InterviewMode {
    pub const ALL: [InterviewMode; 6] = [
        InterviewMode::Hr,
        InterviewMode::Technical,
        InterviewMode::Puzzle,
        InterviewMode::CaseStudy,
        InterviewMode::Behavioral,
        InterviewMode::SystemDesign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMode::Hr => "hr",
            InterviewMode::Technical => "tech",
            InterviewMode::Puzzle => "puzzle",
            InterviewMode::CaseStudy => "case_study",
            InterviewMode::Behavioral => "behavioral",
            InterviewMode::SystemDesign => "system_design",
        }
    }

    /// Label used in prose feedback ("Your HR interview response was ...").
    pub fn interview_label(&self) -> &'static str {
        match self {
            InterviewMode::Hr => "HR interview",
            InterviewMode::Technical => "technical interview",
            InterviewMode::Puzzle => "puzzle interview",
            InterviewMode::CaseStudy => "case study interview",
            InterviewMode::Behavioral => "behavioral interview",
            InterviewMode::SystemDesign => "system design interview",
        }
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewMode {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        InterviewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| EngineError::UnsupportedMode(value.to_string()))
    }
}

/// Advisory metadata for a mode. Read-only lookup table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub question_count: usize,
    pub focus_areas: Vec<String>,
    pub scoring_criteria: Vec<String>,
}

impl ModeConfig {
    fn build(
        name: &str,
        description: &str,
        duration_minutes: u32,
        question_count: usize,
        focus_areas: &[&str],
        scoring_criteria: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            duration_minutes,
            question_count,
            focus_areas: focus_areas.iter().map(|s| s.to_string()).collect(),
            scoring_criteria: scoring_criteria.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in configuration for a mode.
    pub fn for_mode(mode: InterviewMode) -> Self {
        match mode {
            InterviewMode::Hr => Self::build(
                "HR Interview",
                "Behavioral and cultural fit assessment with focus on soft skills and company alignment",
                30,
                5,
                &["communication", "culture_fit", "motivation", "experience", "teamwork"],
                &["clarity", "relevance", "examples", "enthusiasm", "authenticity"],
            ),
            InterviewMode::Technical => Self::build(
                "Technical Interview",
                "Comprehensive technical skills and problem-solving assessment",
                45,
                4,
                &["technical_knowledge", "problem_solving", "system_design", "coding", "algorithms"],
                &["accuracy", "depth", "approach", "communication", "optimization"],
            ),
            InterviewMode::Puzzle => Self::build(
                "Puzzle Interview",
                "Logic and analytical thinking assessment with creative problem-solving",
                60,
                3,
                &["logical_thinking", "analytical_skills", "creativity", "persistence", "pattern_recognition"],
                &["approach", "logic", "creativity", "persistence", "efficiency"],
            ),
            InterviewMode::CaseStudy => Self::build(
                "Case Study Interview",
                "Real-world problem-solving and business impact assessment",
                45,
                2,
                &["business_acumen", "problem_solving", "communication", "impact", "strategy"],
                &["analysis", "structure", "insights", "recommendations", "feasibility"],
            ),
            InterviewMode::Behavioral => Self::build(
                "Behavioral Interview",
                "STAR method focused questions to assess past behavior and performance",
                40,
                4,
                &["situation_handling", "teamwork", "leadership", "conflict_resolution", "achievements"],
                &["star_method", "specificity", "outcomes", "learning", "growth"],
            ),
            InterviewMode::SystemDesign => Self::build(
                "System Design Interview",
                "Architecture and scalable system design assessment",
                60,
                2,
                &["architecture", "scalability", "performance", "reliability", "tradeoffs"],
                &["design_approach", "scalability", "tradeoffs", "communication", "depth"],
            ),
        }
    }
}
