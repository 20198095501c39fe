use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{IntentEvent, LeadState, LeadStateRecord};

/// Persistent view of where each lead sits after its replies.
pub trait LeadStateRepository: Send + Sync {
    fn fetch(&self, email: &str) -> Result<Option<LeadStateRecord>, RepositoryError>;

    /// Appends `event` to the lead's record, creating it if needed, and returns the
    /// updated record. Concurrent calls for one lead must not lose events.
    fn apply(&self, email: &str, event: IntentEvent) -> Result<LeadStateRecord, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("lead state store unavailable: {0}")]
    Unavailable(String),
}

/// Agents that act on a classified reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownstreamAgent {
    /// Follows up on interested leads.
    Closer,
    /// Records opt-outs.
    Compliance,
}

impl DownstreamAgent {
    pub const fn label(self) -> &'static str {
        match self {
            DownstreamAgent::Closer => "closer",
            DownstreamAgent::Compliance => "compliance",
        }
    }
}

/// Request for a downstream agent to act on one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTrigger {
    pub agent: DownstreamAgent,
    pub lead_email: String,
    pub details: BTreeMap<String, String>,
}

/// Outbound hook for downstream agents (queue, webhook, or in-memory log).
pub trait AgentDispatcher: Send + Sync {
    fn dispatch(&self, trigger: AgentTrigger) -> Result<(), DispatchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("agent transport unavailable: {0}")]
    Transport(String),
}

/// Serializable lead state for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStateView {
    pub email: String,
    pub state: &'static str,
    pub history: Vec<IntentEvent>,
}

impl From<LeadStateRecord> for LeadStateView {
    fn from(record: LeadStateRecord) -> Self {
        Self {
            email: record.email,
            state: record.state.label(),
            history: record.history,
        }
    }
}

impl LeadStateView {
    /// View for a lead that has never replied.
    pub fn untouched(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            state: LeadState::New.label(),
            history: Vec::new(),
        }
    }
}
