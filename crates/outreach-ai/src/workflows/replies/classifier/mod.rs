//! Two-tier reply classifier: keyword rules first, then the generative capability,
//! with a local heuristic standing in whenever the capability is absent or fails.

pub mod capability;
pub(crate) mod heuristic;
pub mod openai;
pub mod rules;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::domain::{ClassificationSource, ExtractionResult};

pub use capability::{CapabilityError, IntentCapability};
pub use openai::OpenAiIntentCapability;
pub use rules::RuleMatcher;

/// Settings for the generative capability.
#[derive(Clone)]
pub struct ClassifierConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Classification result together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationOutcome {
    #[serde(flatten)]
    pub result: ExtractionResult,
    pub source: ClassificationSource,
}

/// Reply classifier. Never fails: every call yields exactly one extraction result.
#[derive(Clone)]
pub struct IntentClassifier {
    rules: RuleMatcher,
    capability: Option<Arc<dyn IntentCapability>>,
}

impl IntentClassifier {
    /// Builds the classifier from configuration. A missing key, or a client that cannot
    /// be constructed, leaves the classifier on the local heuristic.
    pub fn new(config: &ClassifierConfig) -> Self {
        match OpenAiIntentCapability::from_config(config) {
            Ok(Some(capability)) => Self::with_capability(Arc::new(capability)),
            Ok(None) => {
                warn!("OPENAI_API_KEY not set; replies fall back to the local heuristic");
                Self::heuristic_only()
            }
            Err(error) => {
                warn!(%error, "intent capability unavailable; using the local heuristic");
                Self::heuristic_only()
            }
        }
    }

    pub fn with_capability(capability: Arc<dyn IntentCapability>) -> Self {
        Self {
            rules: RuleMatcher,
            capability: Some(capability),
        }
    }

    pub fn heuristic_only() -> Self {
        Self {
            rules: RuleMatcher,
            capability: None,
        }
    }

    pub fn has_capability(&self) -> bool {
        self.capability.is_some()
    }

    pub async fn classify(&self, text: &str) -> ExtractionResult {
        self.classify_detailed(text).await.result
    }

    /// Expects text that has already been through `clean_text`.
    pub async fn classify_detailed(&self, text: &str) -> ClassificationOutcome {
        if let Some(result) = self.rules.classify(text) {
            debug!(intent = result.intent.label(), "rule matched");
            return ClassificationOutcome {
                result,
                source: ClassificationSource::Rule,
            };
        }

        let Some(capability) = self.capability.as_ref() else {
            return ClassificationOutcome {
                result: heuristic::classify(text),
                source: ClassificationSource::Heuristic,
            };
        };

        match capability.classify(text).await {
            Ok(result) if result.has_valid_confidence() => ClassificationOutcome {
                result,
                source: ClassificationSource::Capability,
            },
            Ok(result) => {
                warn!(
                    capability = capability.name(),
                    confidence = result.confidence,
                    "capability returned out-of-range confidence; using heuristic"
                );
                Self::degraded(text)
            }
            Err(error) => {
                warn!(
                    capability = capability.name(),
                    %error,
                    "capability failed; using heuristic"
                );
                Self::degraded(text)
            }
        }
    }

    fn degraded(text: &str) -> ClassificationOutcome {
        ClassificationOutcome {
            result: heuristic::classify(text),
            source: ClassificationSource::Degraded,
        }
    }
}

impl fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("capability", &self.capability.as_ref().map(|c| c.name()))
            .finish()
    }
}
