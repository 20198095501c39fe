use super::super::domain::{ExtractionResult, IntentType};
use regex::Regex;
use std::sync::OnceLock;

/// Priority-ordered keyword rules. The first matching rule wins.
const RULES: &[(IntentType, f32, &[&str])] = &[
    (IntentType::Unsubscribe, 1.0, &["unsubscribe", "stop", "remove me"]),
    (
        IntentType::Spam,
        0.9,
        &["buy now", "click here", "winner", "lottery"],
    ),
    (
        IntentType::NotInterested,
        0.9,
        &["not interested", "no thanks", "pass"],
    ),
];

struct CompiledRule {
    intent: IntentType,
    confidence: f32,
    pattern: Regex,
}

static COMPILED_RULES: OnceLock<Vec<CompiledRule>> = OnceLock::new();

fn compiled_rules() -> &'static [CompiledRule] {
    COMPILED_RULES.get_or_init(|| {
        RULES
            .iter()
            .map(|(intent, confidence, phrases)| {
                let alternation = phrases
                    .iter()
                    .map(|phrase| regex::escape(phrase))
                    .collect::<Vec<_>>()
                    .join("|");
                CompiledRule {
                    intent: *intent,
                    confidence: *confidence,
                    pattern: Regex::new(&format!(r"\b({alternation})\b"))
                        .expect("rule phrases are escaped"),
                }
            })
            .collect()
    })
}

/// Deterministic first stage: whole-word phrase tests against the lowercased text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleMatcher;

impl RuleMatcher {
    /// Returns `None` when no rule fires, handing the text to the fallback stage.
    pub fn classify(&self, text: &str) -> Option<ExtractionResult> {
        let lowered = text.to_lowercase();
        compiled_rules()
            .iter()
            .find(|rule| rule.pattern.is_match(&lowered))
            .map(|rule| ExtractionResult::new(rule.intent, rule.confidence))
    }
}
