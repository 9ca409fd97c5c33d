//! Universal metrics — ten mode-independent heuristics computed from the response text.
//!
//! Each metric is either a fixed base plus bonuses, or a sum of per-category
//! increments (a category scores once if any of its indicators appears).
//! All values are clamped to 0.0 – 10.0.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::evaluation::signals::{
    contains_any, count_occurrences, has_digit, score_groups, word_count, IndicatorGroup,
};
use crate::models::question::Question;

pub const METRIC_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniversalMetrics {
    pub emotional_intelligence: f64,
    pub cultural_fit: f64,
    pub communication_clarity: f64,
    pub confidence_level: f64,
    pub specificity: f64,
    pub relevance: f64,
    pub leadership_potential: f64,
    pub innovation_creativity: f64,
    pub stress_management: f64,
    pub adaptability: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Indicator tables
// ────────────────────────────────────────────────────────────────────────────

const EMOTIONAL_INTELLIGENCE: &[IndicatorGroup] = &[
    ("self_awareness", &["i learned", "i realized", "i understand", "i recognize"]),
    ("empathy", &["team", "colleague", "user", "customer", "stakeholder"]),
    ("social_skills", &["collaboration", "communication", "relationship", "partnership"]),
    ("emotional_regulation", &["challenge", "pressure", "stress", "difficult", "handled"]),
];

const CULTURAL_FIT: &[IndicatorGroup] = &[
    ("values", &["integrity", "honesty", "transparency", "ethics"]),
    ("growth", &["learning", "improvement", "development", "growth"]),
    ("innovation", &["creative", "innovative", "new approach", "different"]),
    ("teamwork", &["team", "collaboration", "support", "help"]),
];

const CONFIDENCE: &[IndicatorGroup] = &[
    ("positive", &["confident", "sure", "certain", "definitely", "absolutely"]),
    ("decisive", &["decided", "chose", "selected", "determined"]),
    ("assertive", &["believe", "think", "feel", "know"]),
];

const LEADERSHIP: &[IndicatorGroup] = &[
    ("initiative", &["led", "initiated", "started", "created", "founded"]),
    ("mentorship", &["mentored", "taught", "guided", "helped", "supported"]),
    ("decision_making", &["decided", "chose", "determined", "selected"]),
    ("responsibility", &["responsible", "accountable", "oversaw", "managed"]),
];

const INNOVATION: &[IndicatorGroup] = &[
    ("creative_solutions", &["creative", "innovative", "unique", "different", "novel"]),
    ("problem_solving", &["solved", "resolved", "fixed", "improved", "optimized"]),
    ("thinking_outside_box", &["alternative", "approach", "method", "strategy"]),
    ("adaptation", &["adapted", "modified", "changed", "evolved"]),
];

const STRESS_MANAGEMENT: &[IndicatorGroup] = &[
    ("calm_under_pressure", &["calm", "focused", "composed", "steady"]),
    ("problem_framing", &["analyzed", "assessed", "evaluated", "considered"]),
    ("systematic_approach", &["step by step", "systematically", "methodically"]),
    ("positive_outlook", &["opportunity", "challenge", "learning", "growth"]),
];

const ADAPTABILITY: &[IndicatorGroup] = &[
    ("flexibility", &["adapted", "adjusted", "modified", "changed"]),
    ("learning", &["learned", "studied", "researched", "explored"]),
    ("openness", &["open", "willing", "ready", "excited"]),
    ("resilience", &["overcame", "persisted", "continued", "pushed through"]),
];

const STRUCTURE_WORDS: &[&str] = &["first", "second", "then", "finally", "next"];
const EXAMPLE_WORDS: &[&str] = &["specifically", "for example", "instance", "case"];
const HESITATION_WORDS: &[&str] = &["um", "uh", "like", "you know", "sort of", "kind of"];
const NAMED_ENTITIES: &[&str] = &["google", "amazon", "microsoft", "react", "python", "java"];
const TIME_WORDS: &[&str] = &["week", "month", "year", "quarter"];

const HESITATION_PENALTY: f64 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

impl UniversalMetrics {
    /// Computes all ten metrics for a raw (not yet lowercased) response.
    pub fn extract(response: &str, question: &Question) -> Self {
        Self::from_lowered(&response.to_lowercase(), question)
    }

    pub(crate) fn from_lowered(text: &str, question: &Question) -> Self {
        Self {
            emotional_intelligence: clamp_metric(score_groups(text, EMOTIONAL_INTELLIGENCE, 2.5)),
            cultural_fit: clamp_metric(score_groups(text, CULTURAL_FIT, 2.5)),
            communication_clarity: clamp_metric(communication_clarity(text)),
            confidence_level: clamp_metric(confidence_level(text)),
            specificity: clamp_metric(specificity(text)),
            relevance: clamp_metric(relevance(text, question)),
            leadership_potential: clamp_metric(score_groups(text, LEADERSHIP, 2.5)),
            innovation_creativity: clamp_metric(score_groups(text, INNOVATION, 2.5)),
            stress_management: clamp_metric(5.0 + score_groups(text, STRESS_MANAGEMENT, 1.25)),
            adaptability: clamp_metric(score_groups(text, ADAPTABILITY, 2.5)),
        }
    }

    /// Every metric paired with its key, in record order.
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("emotional_intelligence", self.emotional_intelligence),
            ("cultural_fit", self.cultural_fit),
            ("communication_clarity", self.communication_clarity),
            ("confidence_level", self.confidence_level),
            ("specificity", self.specificity),
            ("relevance", self.relevance),
            ("leadership_potential", self.leadership_potential),
            ("innovation_creativity", self.innovation_creativity),
            ("stress_management", self.stress_management),
            ("adaptability", self.adaptability),
        ]
    }
}

fn clamp_metric(value: f64) -> f64 {
    value.clamp(0.0, METRIC_MAX)
}

fn communication_clarity(text: &str) -> f64 {
    let mut score = 5.0;
    if contains_any(text, STRUCTURE_WORDS) {
        score += 2.0;
    }
    if contains_any(text, EXAMPLE_WORDS) {
        score += 2.0;
    }
    let words = word_count(text);
    if (20..=100).contains(&words) {
        score += 1.0;
    } else if words > 100 {
        score -= 1.0;
    }
    score
}

fn confidence_level(text: &str) -> f64 {
    let base = 5.0 + score_groups(text, CONFIDENCE, 1.5);
    let hesitations = count_occurrences(text, HESITATION_WORDS);
    base - hesitations as f64 * HESITATION_PENALTY
}

fn specificity(text: &str) -> f64 {
    let mut score = 5.0;
    if has_digit(text) {
        score += 2.0;
    }
    if contains_any(text, NAMED_ENTITIES) {
        score += 1.0;
    }
    if contains_any(text, TIME_WORDS) {
        score += 1.0;
    }
    score
}

fn relevance(text: &str, question: &Question) -> f64 {
    let mut score = 7.0;

    let question_text = question.text.to_lowercase();
    let question_words: HashSet<&str> = question_text.split_whitespace().collect();
    if text.split_whitespace().any(|word| question_words.contains(word)) {
        score += 2.0;
    }

    let topic = question.question_type.to_lowercase();
    if !topic.is_empty() && text.contains(&topic) {
        score += 1.0;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Tell me about yourself and your background in software development.",
            "opening",
            &["experience", "projects", "technologies"],
        )
    }

    #[test]
    fn test_empty_response_uses_base_scores() {
        let m = UniversalMetrics::extract("", &question());
        assert_eq!(m.emotional_intelligence, 0.0);
        assert_eq!(m.cultural_fit, 0.0);
        assert_eq!(m.communication_clarity, 5.0);
        assert_eq!(m.confidence_level, 5.0);
        assert_eq!(m.specificity, 5.0);
        assert_eq!(m.relevance, 7.0);
        assert_eq!(m.leadership_potential, 0.0);
        assert_eq!(m.innovation_creativity, 0.0);
        assert_eq!(m.stress_management, 5.0);
        assert_eq!(m.adaptability, 0.0);
    }

    #[test]
    fn test_emotional_intelligence_all_categories_caps_at_ten() {
        let response = "I learned a lot with my team through collaboration under pressure.";
        let m = UniversalMetrics::extract(response, &question());
        assert_eq!(m.emotional_intelligence, 10.0);
    }

    #[test]
    fn test_hesitation_counted_per_occurrence() {
        let response = "um um um uh uh uh like like like";
        let m = UniversalMetrics::extract(response, &question());
        // base 5, no confidence groups, 9 hesitations * 0.5 = 4.5
        assert!((m.confidence_level - 0.5).abs() < 1e-9, "Got {}", m.confidence_level);
    }

    #[test]
    fn test_hesitation_penalty_relative_to_pre_hesitation_value() {
        let clean = "I am confident and I decided to act because I believe in it.";
        let hesitant = format!("{clean} um um um uh uh uh like like like");
        let before = UniversalMetrics::extract(clean, &question()).confidence_level;
        let after = UniversalMetrics::extract(&hesitant, &question()).confidence_level;
        assert!((before - after - 4.5).abs() < 1e-9, "before {before}, after {after}");
    }

    #[test]
    fn test_confidence_floored_at_zero() {
        let response = "um ".repeat(30);
        let m = UniversalMetrics::extract(&response, &question());
        assert_eq!(m.confidence_level, 0.0);
    }

    #[test]
    fn test_long_response_without_structure_loses_clarity() {
        let response = "word ".repeat(120);
        let m = UniversalMetrics::extract(&response, &question());
        assert_eq!(m.communication_clarity, 4.0);
    }

    #[test]
    fn test_structured_mid_length_response_gets_full_clarity() {
        let response = "First I mapped the problem, then I built a prototype. For example, \
                        we replaced the queue and finally measured the results across the fleet.";
        let m = UniversalMetrics::extract(response, &question());
        assert_eq!(m.communication_clarity, 10.0);
    }

    #[test]
    fn test_specificity_rewards_digits_entities_and_time() {
        let m = UniversalMetrics::extract("Shipped 3 Python services in a quarter", &question());
        assert_eq!(m.specificity, 9.0);
    }

    #[test]
    fn test_relevance_overlap_and_type_bonus() {
        let m = UniversalMetrics::extract("my background is an opening chapter", &question());
        assert_eq!(m.relevance, 10.0);
    }

    #[test]
    fn test_relevance_ignores_empty_type() {
        let q = Question::new("Why?", "", &[]);
        let m = UniversalMetrics::extract("because", &q);
        assert_eq!(m.relevance, 7.0);
    }

    #[test]
    fn test_stress_management_quarter_increments() {
        let m = UniversalMetrics::extract("I stayed calm and saw an opportunity", &question());
        assert_eq!(m.stress_management, 7.5);
    }

    #[test]
    fn test_cultural_fit_per_category() {
        let q = question();
        assert_eq!(UniversalMetrics::extract("I value integrity", &q).cultural_fit, 2.5);
        assert_eq!(
            UniversalMetrics::extract("integrity and honesty", &q).cultural_fit,
            2.5,
            "same category counts once"
        );
        assert_eq!(
            UniversalMetrics::extract("integrity, growth, creative, support", &q).cultural_fit,
            10.0
        );
    }

    #[test]
    fn test_leadership_potential_per_category() {
        let q = question();
        assert_eq!(UniversalMetrics::extract("I mentored two juniors", &q).leadership_potential, 2.5);
        assert_eq!(
            UniversalMetrics::extract("I mentored and taught them", &q).leadership_potential,
            2.5,
            "same category counts once"
        );
        assert_eq!(
            UniversalMetrics::extract("I led, mentored, decided, was responsible", &q)
                .leadership_potential,
            10.0
        );
    }

    #[test]
    fn test_innovation_creativity_per_category() {
        let q = question();
        assert_eq!(UniversalMetrics::extract("a novel idea", &q).innovation_creativity, 2.5);
        assert_eq!(
            UniversalMetrics::extract("a novel and unique idea", &q).innovation_creativity,
            2.5,
            "same category counts once"
        );
        assert_eq!(
            UniversalMetrics::extract("novel, solved, strategy, adapted", &q).innovation_creativity,
            10.0
        );
    }

    #[test]
    fn test_adaptability_per_category() {
        let q = question();
        assert_eq!(UniversalMetrics::extract("I studied it", &q).adaptability, 2.5);
        assert_eq!(
            UniversalMetrics::extract("I studied and researched it", &q).adaptability,
            2.5,
            "same category counts once"
        );
        assert_eq!(
            UniversalMetrics::extract("adjusted, studied, open, overcame", &q).adaptability,
            10.0
        );
    }

    #[test]
    fn test_all_metrics_within_bounds_for_dense_response() {
        let response = "I learned, team, collaboration, pressure, integrity, growth, creative, \
                        support, first, for example, confident, decided, believe, 2023, google, \
                        year, led, mentored, responsible, novel, solved, strategy, adapted, calm, \
                        analyzed, step by step, opportunity, adjusted, studied, open, overcame";
        let m = UniversalMetrics::extract(response, &question());
        for (key, value) in m.entries() {
            assert!((0.0..=METRIC_MAX).contains(&value), "{key} out of bounds: {value}");
        }
    }
}
