use super::super::domain::{ExtractionResult, IntentType};

const PLACEHOLDER_MEETING_TIME: &str = "Next Tuesday at 10am";
const PLACEHOLDER_PRODUCT: &str = "General Inquiry";

/// Local substitute for the external capability. Always produces a result.
pub(crate) fn classify(text: &str) -> ExtractionResult {
    let lowered = text.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if mentions(&["schedule", "meet"]) {
        ExtractionResult::new(IntentType::ScheduleRequest, 0.85)
            .with_meeting_time(PLACEHOLDER_MEETING_TIME)
    } else if mentions(&["price", "cost", "interested"]) {
        ExtractionResult::new(IntentType::Interested, 0.8)
            .with_requested_product(PLACEHOLDER_PRODUCT)
    } else {
        ExtractionResult::new(IntentType::Unknown, 0.5)
    }
}
