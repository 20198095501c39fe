use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classified purpose of an inbound reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    Interested,
    NotInterested,
    AskInfo,
    Spam,
    Unsubscribe,
    ScheduleRequest,
    Unknown,
}

impl IntentType {
    pub const fn label(self) -> &'static str {
        match self {
            IntentType::Interested => "interested",
            IntentType::NotInterested => "not_interested",
            IntentType::AskInfo => "ask_info",
            IntentType::Spam => "spam",
            IntentType::Unsubscribe => "unsubscribe",
            IntentType::ScheduleRequest => "schedule_request",
            IntentType::Unknown => "unknown",
        }
    }

    /// Lead state implied by this intent, if it moves the lead at all.
    pub const fn lead_state(self) -> Option<LeadState> {
        match self {
            IntentType::Interested => Some(LeadState::Interested),
            IntentType::NotInterested => Some(LeadState::NotInterested),
            IntentType::Unsubscribe => Some(LeadState::Unsubscribed),
            IntentType::ScheduleRequest => Some(LeadState::Scheduled),
            IntentType::AskInfo | IntentType::Spam | IntentType::Unknown => None,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Structured reading of one reply. Exactly one is produced per classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionResult {
    pub intent: IntentType,
    /// Always within `[0.0, 1.0]`.
    pub confidence: f32,
    #[serde(default)]
    pub requested_product: Option<String>,
    #[serde(default)]
    pub budget_hint: Option<String>,
    #[serde(default)]
    pub meeting_time: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl ExtractionResult {
    pub fn new(intent: IntentType, confidence: f32) -> Self {
        Self {
            intent,
            confidence,
            requested_product: None,
            budget_hint: None,
            meeting_time: None,
            language: default_language(),
        }
    }

    pub fn with_meeting_time(mut self, meeting_time: impl Into<String>) -> Self {
        self.meeting_time = Some(meeting_time.into());
        self
    }

    pub fn with_requested_product(mut self, product: impl Into<String>) -> Self {
        self.requested_product = Some(product.into());
        self
    }

    pub fn has_valid_confidence(&self) -> bool {
        self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence)
    }
}

/// Which stage of the classifier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    Rule,
    Capability,
    /// Local heuristic because no capability is configured.
    Heuristic,
    /// Local heuristic because the configured capability failed.
    Degraded,
}

impl ClassificationSource {
    pub const fn label(self) -> &'static str {
        match self {
            ClassificationSource::Rule => "rule",
            ClassificationSource::Capability => "capability",
            ClassificationSource::Heuristic => "heuristic",
            ClassificationSource::Degraded => "degraded",
        }
    }
}

/// Raw reply as received from the mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub sender: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            received_at: Utc::now(),
        }
    }
}

/// Where a lead sits in the outreach conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadState {
    #[default]
    New,
    Contacted,
    Interested,
    NotInterested,
    Unsubscribed,
    Scheduled,
}

impl LeadState {
    pub const fn label(self) -> &'static str {
        match self {
            LeadState::New => "new",
            LeadState::Contacted => "contacted",
            LeadState::Interested => "interested",
            LeadState::NotInterested => "not_interested",
            LeadState::Unsubscribed => "unsubscribed",
            LeadState::Scheduled => "scheduled",
        }
    }
}

/// One classified reply in a lead's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentEvent {
    pub intent: IntentType,
    pub confidence: f32,
    pub source: ClassificationSource,
    pub received_at: DateTime<Utc>,
}

/// Current state and reply history for one lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadStateRecord {
    pub email: String,
    pub state: LeadState,
    pub history: Vec<IntentEvent>,
}

impl LeadStateRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            state: LeadState::New,
            history: Vec::new(),
        }
    }

    /// Records a classified reply. A lead that replied is at least CONTACTED, and an
    /// unsubscribed lead stays unsubscribed whatever it says next.
    pub fn apply(&mut self, event: IntentEvent) {
        self.state = match (self.state, event.intent.lead_state()) {
            (LeadState::Unsubscribed, _) => LeadState::Unsubscribed,
            (_, Some(state)) => state,
            (LeadState::New, None) => LeadState::Contacted,
            (current, None) => current,
        };
        self.history.push(event);
    }

    pub fn is_suppressed(&self) -> bool {
        self.state == LeadState::Unsubscribed
    }
}
