use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::classifier::IntentClassifier;
use super::domain::{
    ClassificationSource, ExtractionResult, InboundMessage, IntentEvent, IntentType, LeadState,
    LeadStateRecord,
};
use super::repository::{
    AgentDispatcher, AgentTrigger, DispatchError, DownstreamAgent, LeadStateRepository,
    RepositoryError,
};
use super::text::{clean_text, detect_language};
use crate::workflows::leadgen::ingest::normalize_email;

/// Reply handler: clean, classify, update lead state, and trigger downstream agents.
pub struct ReplyHandlerService<S, D> {
    classifier: Arc<IntentClassifier>,
    states: Arc<S>,
    dispatcher: Arc<D>,
}

/// Everything the reply handler decided about one inbound message.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyOutcome {
    pub sender: String,
    pub result: ExtractionResult,
    pub source: ClassificationSource,
    pub lead_state: LeadState,
    pub triggered: Vec<DownstreamAgent>,
}

impl<S, D> ReplyHandlerService<S, D>
where
    S: LeadStateRepository + 'static,
    D: AgentDispatcher + 'static,
{
    pub fn new(classifier: Arc<IntentClassifier>, states: Arc<S>, dispatcher: Arc<D>) -> Self {
        Self {
            classifier,
            states,
            dispatcher,
        }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Classification never fails; only the state store and dispatcher can.
    pub async fn process_inbound(
        &self,
        message: InboundMessage,
    ) -> Result<ReplyOutcome, ReplyServiceError> {
        let cleaned = clean_text(&message.body);
        let language = detect_language(&cleaned);

        let outcome = self.classifier.classify_detailed(&cleaned).await;
        let mut result = outcome.result;
        result.language = language;

        let sender = normalize_email(&message.sender);
        let record = self.states.apply(
            &sender,
            IntentEvent {
                intent: result.intent,
                confidence: result.confidence,
                source: outcome.source,
                received_at: message.received_at,
            },
        )?;
        let lead_state = record.state;

        let triggered = self.trigger_agents(&sender, &record, &result)?;

        info!(
            sender = %sender,
            intent = result.intent.label(),
            confidence = result.confidence,
            source = outcome.source.label(),
            state = lead_state.label(),
            "processed inbound reply"
        );

        Ok(ReplyOutcome {
            sender,
            result,
            source: outcome.source,
            lead_state,
            triggered,
        })
    }

    pub fn lead_state(&self, email: &str) -> Result<Option<LeadStateRecord>, ReplyServiceError> {
        Ok(self.states.fetch(&normalize_email(email))?)
    }

    fn trigger_agents(
        &self,
        sender: &str,
        record: &LeadStateRecord,
        result: &ExtractionResult,
    ) -> Result<Vec<DownstreamAgent>, ReplyServiceError> {
        let mut details = BTreeMap::new();
        let agent = match result.intent {
            IntentType::Interested if record.is_suppressed() => {
                info!(lead = %sender, "lead is unsubscribed; closer not triggered");
                return Ok(Vec::new());
            }
            IntentType::Interested => {
                if let Some(product) = &result.requested_product {
                    details.insert("requested_product".to_string(), product.clone());
                }
                if let Some(budget) = &result.budget_hint {
                    details.insert("budget_hint".to_string(), budget.clone());
                }
                DownstreamAgent::Closer
            }
            IntentType::Unsubscribe => {
                details.insert("reason".to_string(), "opt_out".to_string());
                DownstreamAgent::Compliance
            }
            _ => return Ok(Vec::new()),
        };

        self.dispatcher.dispatch(AgentTrigger {
            agent,
            lead_email: sender.to_string(),
            details,
        })?;
        info!(agent = agent.label(), lead = %sender, "triggered downstream agent");

        Ok(vec![agent])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
