// Prompt constants for per-response analysis by the LLM collaborator.

use crate::models::question::Question;

/// System prompt — interview-coach persona with JSON-only output.
pub const RESPONSE_ANALYSIS_SYSTEM: &str = "You are an expert interview coach and hiring manager \
    with deep knowledge of technical roles, behavioral psychology, and corporate culture. \
    Provide comprehensive, constructive feedback on interview responses with specific actionable insights. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

/// Analysis prompt template. Replace: {role}, {mode}, {question}, {answer}, {context}
pub const RESPONSE_ANALYSIS_TEMPLATE: &str = r#"Analyze this {mode} interview response for a {role} position with comprehensive metrics.

Question: {question}
Answer: {answer}
{context}
Return a JSON object with this EXACT schema:
{
  "score": <1-10>,
  "feedback": "<detailed, actionable feedback>",
  "strengths": ["<specific strength>"],
  "improvements": ["<specific improvement>"],
  "keywords": ["<relevant keyword>"],
  "confidence": <0.0-1.0>,
  "emotional_intelligence": <1-10>,
  "cultural_fit": <1-10>,
  "communication_clarity": <1-10>,
  "technical_depth": <1-10>,
  "problem_solving": <1-10>,
  "confidence_level": <1-10>,
  "specificity": <1-10>,
  "relevance": <1-10>
}

Consider:
- Technical accuracy and depth
- Communication effectiveness
- Emotional intelligence indicators
- Cultural alignment
- Problem-solving approach
- Confidence and poise
- Specificity of examples
- Relevance to the question"#;

/// Fills the analysis template. Expected keywords, when present, are passed as context.
pub fn build_response_analysis_prompt(
    question: &Question,
    answer: &str,
    role: &str,
    mode: &str,
) -> String {
    let context = if question.expected_keywords.is_empty() {
        String::new()
    } else {
        format!(
            "Expected keywords: {}\n",
            question.expected_keywords.join(", ")
        )
    };

    fill_template(
        RESPONSE_ANALYSIS_TEMPLATE,
        &[
            ("role", role),
            ("mode", mode),
            ("context", &context),
            ("question", &question.text),
            ("answer", answer),
        ],
    )
}

/// Single-pass `{name}` substitution. Inserted values are never rescanned, and
/// braces that do not open a known placeholder are copied through.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_question_answer_and_keywords() {
        let q = Question::new("Why us?", "motivation", &["company", "culture"]);
        let prompt = build_response_analysis_prompt(&q, "I love the mission.", "Data Scientist", "hr");
        assert!(prompt.contains("hr interview response for a Data Scientist position"));
        assert!(prompt.contains("Question: Why us?"));
        assert!(prompt.contains("Answer: I love the mission."));
        assert!(prompt.contains("Expected keywords: company, culture"));
        assert!(!prompt.contains("{answer}"));
    }

    #[test]
    fn test_prompt_omits_context_without_keywords() {
        let q = Question::new("8 balls puzzle", "logic", &[]);
        let prompt = build_response_analysis_prompt(&q, "Split in three.", "Software Engineer", "puzzle");
        assert!(!prompt.contains("Expected keywords"));
        assert!(!prompt.contains("{context}"));
    }

    #[test]
    fn test_placeholders_inside_inserted_values_stay_literal() {
        let q = Question::new("Explain the {answer} field.", "api", &["{question}"]);
        let prompt = build_response_analysis_prompt(&q, "It holds {mode}.", "Software Engineer", "tech");
        assert!(prompt.contains("Question: Explain the {answer} field."));
        assert!(prompt.contains("Answer: It holds {mode}."));
        assert!(prompt.contains("Expected keywords: {question}"));
        assert_eq!(prompt.matches("It holds").count(), 1, "answer inserted once");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let filled = fill_template("{\n  \"score\": {x} {name}}", &[("name", "ok")]);
        assert_eq!(filled, "{\n  \"score\": {x} ok}");
    }
}
