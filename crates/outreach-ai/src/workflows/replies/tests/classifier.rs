use super::common::*;
use std::sync::Arc;

use crate::workflows::replies::classifier::IntentClassifier;
use crate::workflows::replies::domain::{ClassificationSource, ExtractionResult, IntentType};

#[tokio::test]
async fn unsubscribe_wins_over_every_other_signal() {
    let classifier = IntentClassifier::heuristic_only();
    let result = classifier
        .classify("Click here to schedule, I'm interested, but please unsubscribe me")
        .await;

    assert_eq!(result.intent, IntentType::Unsubscribe);
    assert_eq!(result.confidence, 1.0);
}

#[tokio::test]
async fn spam_sentence_is_caught_by_rules() {
    let outcome = IntentClassifier::heuristic_only()
        .classify_detailed(SPAM_SENTENCE)
        .await;

    assert_eq!(outcome.result.intent, IntentType::Spam);
    assert_eq!(outcome.result.confidence, 0.9);
    assert_eq!(outcome.source, ClassificationSource::Rule);
}

#[tokio::test]
async fn heuristic_extracts_placeholder_meeting_time() {
    let outcome = IntentClassifier::heuristic_only()
        .classify_detailed("Happy to meet next week")
        .await;

    assert_eq!(outcome.source, ClassificationSource::Heuristic);
    assert_eq!(outcome.result.intent, IntentType::ScheduleRequest);
    assert_eq!(outcome.result.confidence, 0.85);
    assert_eq!(
        outcome.result.meeting_time.as_deref(),
        Some("Next Tuesday at 10am")
    );
}

#[tokio::test]
async fn unmatched_text_is_unknown() {
    let result = IntentClassifier::heuristic_only()
        .classify("Thanks for the note.")
        .await;
    assert_eq!(result.intent, IntentType::Unknown);
    assert_eq!(result.confidence, 0.5);
}

#[tokio::test]
async fn repeated_classification_is_identical() {
    let classifier = IntentClassifier::heuristic_only();
    for text in [
        SPAM_SENTENCE,
        "What does it cost?",
        "Can we schedule a call?",
        "",
    ] {
        let first = classifier.classify_detailed(text).await;
        let second = classifier.classify_detailed(text).await;
        assert_eq!(first, second, "classification of {text:?} drifted");
    }
}

#[tokio::test]
async fn rules_short_circuit_the_capability() {
    let capability = Arc::new(StaticCapability::new(ExtractionResult::new(
        IntentType::Interested,
        0.99,
    )));
    let classifier = IntentClassifier::with_capability(capability.clone());

    let outcome = classifier.classify_detailed("No thanks, we're set.").await;

    assert_eq!(outcome.result.intent, IntentType::NotInterested);
    assert_eq!(outcome.source, ClassificationSource::Rule);
    assert_eq!(capability.calls(), 0);
}

#[tokio::test]
async fn capability_answers_when_no_rule_fires() {
    let answer = ExtractionResult::new(IntentType::AskInfo, 0.72).with_requested_product("SSO");
    let capability = Arc::new(StaticCapability::new(answer.clone()));
    let classifier = IntentClassifier::with_capability(capability.clone());

    let outcome = classifier
        .classify_detailed("Does your platform support SSO?")
        .await;

    assert_eq!(outcome.source, ClassificationSource::Capability);
    assert_eq!(outcome.result, answer);
    assert_eq!(capability.calls(), 1);
}

#[tokio::test]
async fn capability_failure_degrades_to_heuristic() {
    let classifier = IntentClassifier::with_capability(Arc::new(FailingCapability));

    let outcome = classifier
        .classify_detailed("Can we schedule a demo on Thursday?")
        .await;

    assert_eq!(outcome.source, ClassificationSource::Degraded);
    assert_eq!(outcome.result.intent, IntentType::ScheduleRequest);
    assert_eq!(outcome.result.confidence, 0.85);
}

#[tokio::test]
async fn out_of_range_confidence_degrades_to_heuristic() {
    let classifier = IntentClassifier::with_capability(Arc::new(StaticCapability::new(
        ExtractionResult::new(IntentType::Interested, 1.7),
    )));

    let outcome = classifier.classify_detailed("Tell me more").await;

    assert_eq!(outcome.source, ClassificationSource::Degraded);
    assert_eq!(outcome.result.intent, IntentType::Unknown);
    assert_eq!(outcome.result.confidence, 0.5);
}

#[test]
fn missing_api_key_selects_heuristic() {
    let classifier = IntentClassifier::new(&Default::default());
    assert!(!classifier.has_capability());
}

#[test]
fn config_debug_redacts_api_key() {
    let config = crate::workflows::replies::ClassifierConfig {
        api_key: Some("sk-secret".to_string()),
        ..Default::default()
    };
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("sk-secret"));
    assert!(rendered.contains("<redacted>"));
}
