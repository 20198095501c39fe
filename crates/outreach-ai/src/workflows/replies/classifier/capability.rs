use super::super::domain::ExtractionResult;
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of the external classification capability. None of them reach callers
/// of the classifier; they select the local heuristic instead.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    #[error("response does not match the extraction schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f32),

    #[error("capability unavailable: {0}")]
    Unavailable(String),
}

/// Opaque generative classifier consulted when no rule fires.
#[async_trait]
pub trait IntentCapability: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> Result<ExtractionResult, CapabilityError>;
}

/// Parses a model reply into an extraction result. Markdown code fences are tolerated;
/// unknown fields, unknown intents, and out-of-range confidences are not.
pub(crate) fn parse_extraction(raw: &str) -> Result<ExtractionResult, CapabilityError> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    if body.is_empty() {
        return Err(CapabilityError::InvalidResponse(
            "empty completion".to_string(),
        ));
    }

    let result: ExtractionResult = serde_json::from_str(body)?;
    if !result.has_valid_confidence() {
        return Err(CapabilityError::ConfidenceOutOfRange(result.confidence));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::replies::domain::IntentType;

    #[test]
    fn parses_plain_and_fenced_json() {
        let plain = r#"{"intent":"ask_info","confidence":0.7,"requested_product":"API plan"}"#;
        let result = parse_extraction(plain).expect("parses");
        assert_eq!(result.intent, IntentType::AskInfo);
        assert_eq!(result.requested_product.as_deref(), Some("API plan"));
        assert_eq!(result.language, "en");

        let fenced = "```json\n{\"intent\":\"interested\",\"confidence\":0.9,\"budget_hint\":\"$5k\"}\n```";
        let result = parse_extraction(fenced).expect("parses fenced");
        assert_eq!(result.intent, IntentType::Interested);
        assert_eq!(result.budget_hint.as_deref(), Some("$5k"));
    }

    #[test]
    fn rejects_unknown_fields_and_intents() {
        assert!(matches!(
            parse_extraction(r#"{"intent":"interested","confidence":0.9,"mood":"happy"}"#),
            Err(CapabilityError::Schema(_))
        ));
        assert!(matches!(
            parse_extraction(r#"{"intent":"curious","confidence":0.9}"#),
            Err(CapabilityError::Schema(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        assert!(matches!(
            parse_extraction(r#"{"intent":"interested","confidence":1.4}"#),
            Err(CapabilityError::ConfidenceOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_empty_completions() {
        assert!(matches!(
            parse_extraction("  "),
            Err(CapabilityError::InvalidResponse(_))
        ));
    }
}
