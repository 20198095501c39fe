//! Reply handler: text cleaning, two-tier intent classification, lead state, and
//! downstream agent triggers.

pub mod classifier;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod text;

#[cfg(test)]
mod tests;

pub use classifier::{
    CapabilityError, ClassificationOutcome, ClassifierConfig, IntentCapability,
    IntentClassifier, OpenAiIntentCapability, RuleMatcher,
};
pub use domain::{
    ClassificationSource, ExtractionResult, InboundMessage, IntentEvent, IntentType, LeadState,
    LeadStateRecord,
};
pub use repository::{
    AgentDispatcher, AgentTrigger, DispatchError, DownstreamAgent, LeadStateRepository,
    LeadStateView, RepositoryError,
};
pub use router::{reply_router, InboundReplyRequest};
pub use service::{ReplyHandlerService, ReplyOutcome, ReplyServiceError};
pub use text::{clean_text, detect_language};
