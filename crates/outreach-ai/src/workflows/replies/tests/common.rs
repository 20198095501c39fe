use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::replies::classifier::{CapabilityError, IntentCapability, IntentClassifier};
use crate::workflows::replies::domain::{ExtractionResult, IntentEvent, LeadStateRecord};
use crate::workflows::replies::repository::{
    AgentDispatcher, AgentTrigger, DispatchError, LeadStateRepository, RepositoryError,
};
use crate::workflows::replies::service::ReplyHandlerService;

pub(super) const SPAM_SENTENCE: &str = "You are a winner! Click here to claim your prize.";

#[derive(Default)]
pub(super) struct MemoryStates {
    records: Mutex<HashMap<String, LeadStateRecord>>,
}

impl LeadStateRepository for MemoryStates {
    fn fetch(&self, email: &str) -> Result<Option<LeadStateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("mutex poisoned");
        Ok(guard.get(email).cloned())
    }

    fn apply(&self, email: &str, event: IntentEvent) -> Result<LeadStateRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("mutex poisoned");
        let record = guard
            .entry(email.to_string())
            .or_insert_with(|| LeadStateRecord::new(email));
        record.apply(event);
        Ok(record.clone())
    }
}

/// Holds every `apply` call until `parties` of them are in flight at once.
pub(super) struct GatedStates {
    inner: MemoryStates,
    gate: Barrier,
}

impl GatedStates {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            inner: MemoryStates::default(),
            gate: Barrier::new(parties),
        }
    }
}

impl LeadStateRepository for GatedStates {
    fn fetch(&self, email: &str) -> Result<Option<LeadStateRecord>, RepositoryError> {
        self.inner.fetch(email)
    }

    fn apply(&self, email: &str, event: IntentEvent) -> Result<LeadStateRecord, RepositoryError> {
        self.gate.wait();
        self.inner.apply(email, event)
    }
}

#[derive(Default)]
pub(super) struct RecordingDispatcher {
    triggers: Mutex<Vec<AgentTrigger>>,
}

impl RecordingDispatcher {
    pub(super) fn triggers(&self) -> Vec<AgentTrigger> {
        self.triggers.lock().expect("mutex poisoned").clone()
    }
}

impl AgentDispatcher for RecordingDispatcher {
    fn dispatch(&self, trigger: AgentTrigger) -> Result<(), DispatchError> {
        self.triggers.lock().expect("mutex poisoned").push(trigger);
        Ok(())
    }
}

pub(super) struct OfflineDispatcher;

impl AgentDispatcher for OfflineDispatcher {
    fn dispatch(&self, _trigger: AgentTrigger) -> Result<(), DispatchError> {
        Err(DispatchError::Transport("queue offline".to_string()))
    }
}

/// Capability that always answers with the same result and counts its calls.
pub(super) struct StaticCapability {
    result: ExtractionResult,
    calls: AtomicUsize,
}

impl StaticCapability {
    pub(super) fn new(result: ExtractionResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntentCapability for StaticCapability {
    fn name(&self) -> &str {
        "static"
    }

    async fn classify(&self, _text: &str) -> Result<ExtractionResult, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

pub(super) struct FailingCapability;

#[async_trait]
impl IntentCapability for FailingCapability {
    fn name(&self) -> &str {
        "failing"
    }

    async fn classify(&self, _text: &str) -> Result<ExtractionResult, CapabilityError> {
        Err(CapabilityError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })
    }
}

pub(super) fn heuristic_service() -> (
    ReplyHandlerService<MemoryStates, RecordingDispatcher>,
    Arc<MemoryStates>,
    Arc<RecordingDispatcher>,
) {
    let states = Arc::new(MemoryStates::default());
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let service = ReplyHandlerService::new(
        Arc::new(IntentClassifier::heuristic_only()),
        states.clone(),
        dispatcher.clone(),
    );
    (service, states, dispatcher)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
