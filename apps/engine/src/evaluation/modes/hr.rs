//! HR mode — rewards detail, personal voice, enthusiasm, and company/role awareness.

use super::{MetricOverrides, ModeAssessment, ModeEvaluator, ResponseContext, ScoreSheet};
use crate::evaluation::signals::{contains_any, count_present, has_digit, word_count};
use crate::models::mode::InterviewMode;

const PERSONAL: &[&str] = &["i", "me", "my", "we", "our", "myself"];
const ENTHUSIASM: &[&str] = &[
    "excited",
    "passionate",
    "love",
    "enjoy",
    "great",
    "amazing",
    "thrilled",
    "motivated",
];
const PROFESSIONAL: &[&str] = &["experience", "skills", "expertise", "knowledge", "professional"];
const GOALS: &[&str] = &["goal", "objective", "aim", "aspire", "want", "hope", "plan"];
const COMPANY: &[&str] = &["company", "organization", "culture", "values", "mission", "vision"];
const PROBLEM_SOLVING: &[&str] = &["challenge", "problem", "solution", "approach", "strategy", "method"];
const TEAMWORK: &[&str] = &["team", "collaboration", "cooperation", "partnership", "together"];
const LEARNING: &[&str] = &["learn", "grow", "develop", "improve", "enhance", "skill"];
const CONFIDENCE: &[&str] = &["confident", "sure", "certain", "believe", "know", "can"];
const TIME: &[&str] = &["year", "month", "week", "quarter", "period"];

/// Derived metric factors applied to the unclamped HR score.
const TECHNICAL_DEPTH_FACTOR: f64 = 0.3;
const PROBLEM_SOLVING_FACTOR: f64 = 0.4;
const CONFIDENCE_FACTOR: f64 = 0.5;

pub struct HrEvaluator;

impl ModeEvaluator for HrEvaluator {
    fn mode(&self) -> InterviewMode {
        InterviewMode::Hr
    }

    fn keyword_weight(&self) -> f64 {
        30.0
    }

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment {
        let text = ctx.text;
        let mut sheet = ScoreSheet::seeded(ctx.keyword_score, self.keyword_weight());

        match word_count(text) {
            n if n > 80 => sheet.strength(15.0, "Comprehensive and detailed response"),
            n if n > 50 => sheet.strength(12.0, "Good level of detail and elaboration"),
            n if n > 25 => sheet.strength(8.0, "Appropriate level of detail"),
            _ => sheet.improvement(3.0, "Consider providing more specific examples and details"),
        }

        match count_present(text, PERSONAL) {
            n if n >= 3 => sheet.strength(15.0, "Strong use of personal experiences and examples"),
            n if n >= 1 => sheet.strength(10.0, "Good use of personal examples"),
            _ => sheet.improvement(2.0, "Include more personal experiences and specific examples"),
        }

        match count_present(text, ENTHUSIASM) {
            n if n >= 2 => sheet.strength(12.0, "Shows genuine enthusiasm and positive attitude"),
            n if n >= 1 => sheet.strength(8.0, "Demonstrates positive outlook"),
            _ => sheet.improvement(3.0, "Show more enthusiasm and passion for the role"),
        }

        sheet.cue(
            count_present(text, PROFESSIONAL) >= 2,
            (10.0, "Uses professional language and terminology"),
            (5.0, "Incorporate more professional terminology"),
        );
        sheet.cue(
            contains_any(text, GOALS),
            (8.0, "Shows clear goals and motivation"),
            (3.0, "Express your career goals and motivation"),
        );
        sheet.cue(
            contains_any(text, COMPANY),
            (8.0, "Demonstrates knowledge about the company"),
            (2.0, "Show knowledge about the company and its culture"),
        );
        sheet.cue(
            contains_any(text, PROBLEM_SOLVING),
            (7.0, "Shows problem-solving mindset"),
            (3.0, "Demonstrate your problem-solving approach"),
        );
        sheet.cue(
            contains_any(text, TEAMWORK),
            (7.0, "Emphasizes teamwork and collaboration"),
            (3.0, "Highlight your teamwork and collaboration skills"),
        );
        sheet.cue(
            contains_any(text, LEARNING),
            (6.0, "Shows learning and growth mindset"),
            (2.0, "Express your commitment to learning and growth"),
        );

        match count_present(text, CONFIDENCE) {
            n if n >= 2 => sheet.strength(6.0, "Demonstrates confidence and self-assurance"),
            n if n >= 1 => sheet.strength(4.0, "Shows some confidence"),
            _ => sheet.improvement(1.0, "Express more confidence in your abilities"),
        }

        if has_digit(text) {
            sheet.strength(5.0, "Uses specific numbers and metrics");
        }
        if contains_any(text, TIME) {
            sheet.strength(4.0, "Provides time-specific examples");
        }

        if let Some(note) = question_type_bonus(&ctx.question.question_type, text) {
            sheet.strength(5.0, note);
        }

        let raw = sheet.raw();
        sheet.finish(MetricOverrides {
            technical_depth: Some(raw * TECHNICAL_DEPTH_FACTOR),
            problem_solving: Some(raw * PROBLEM_SOLVING_FACTOR),
            confidence_level: Some(raw * CONFIDENCE_FACTOR),
        })
    }
}

/// Extra credit when the answer addresses what the question type asks for.
fn question_type_bonus(question_type: &str, text: &str) -> Option<&'static str> {
    match question_type {
        "opening" if contains_any(text, &["background", "experience"]) => {
            Some("Effectively introduces background and experience")
        }
        "motivation" if contains_any(text, &["interested", "passion"]) => {
            Some("Clearly expresses motivation and interest")
        }
        "experience" if contains_any(text, &["challenge", "problem"]) => {
            Some("Describes challenging experiences effectively")
        }
        _ => None,
    }
}
