use super::{MetricOverrides, ModeAssessment, ModeEvaluator, ResponseContext, ScoreSheet};
use crate::evaluation::signals::{contains_any, count_present};
use crate::models::mode::InterviewMode;

const ARCHITECTURE: &[&str] = &["database", "cache", "load_balancer", "api", "microservices", "monitoring"];
const SCALABILITY: &[&str] = &["scale", "scalability", "performance", "throughput", "latency"];
const TRADE_OFFS: &[&str] = &["trade", "tradeoff", "pros", "cons", "advantage", "disadvantage"];
const SYSTEM_THINKING: &[&str] = &["component", "service", "layer", "interface", "protocol"];

/// System-design mode: named building blocks, scalability, trade-offs, system-level vocabulary.
pub struct SystemDesignEvaluator;

impl ModeEvaluator for SystemDesignEvaluator {
    fn mode(&self) -> InterviewMode {
        InterviewMode::SystemDesign
    }

    fn keyword_weight(&self) -> f64 {
        40.0
    }

    fn evaluate(&self, ctx: &ResponseContext<'_>) -> ModeAssessment {
        let text = ctx.text;
        let mut sheet = ScoreSheet::seeded(ctx.keyword_score, self.keyword_weight());

        sheet.add(count_present(text, ARCHITECTURE) as f64 * 8.0);

        sheet.cue(
            contains_any(text, SCALABILITY),
            (20.0, "Considers scalability"),
            (5.0, "Address scalability concerns"),
        );
        sheet.cue(
            contains_any(text, TRADE_OFFS),
            (15.0, "Discusses trade-offs"),
            (5.0, "Discuss trade-offs between different approaches"),
        );
        sheet.cue(
            contains_any(text, SYSTEM_THINKING),
            (15.0, "Shows system-level thinking"),
            (5.0, "Think about system components and interactions"),
        );

        sheet.finish(MetricOverrides::default())
    }
}
