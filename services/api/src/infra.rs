use metrics_exporter_prometheus::PrometheusHandle;
use outreach_ai::error::AppError;
use outreach_ai::workflows::leadgen::IcpProfile;
use outreach_ai::workflows::replies::{
    AgentDispatcher, AgentTrigger, DispatchError, IntentEvent, LeadStateRecord,
    LeadStateRepository, RepositoryError,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadStateRepository {
    records: Arc<Mutex<HashMap<String, LeadStateRecord>>>,
}

impl LeadStateRepository for InMemoryLeadStateRepository {
    fn fetch(&self, email: &str) -> Result<Option<LeadStateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(email).cloned())
    }

    fn apply(&self, email: &str, event: IntentEvent) -> Result<LeadStateRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard
            .entry(email.to_string())
            .or_insert_with(|| LeadStateRecord::new(email));
        record.apply(event);
        Ok(record.clone())
    }
}

/// Keeps triggers in memory until a real queue is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAgentDispatcher {
    triggers: Arc<Mutex<Vec<AgentTrigger>>>,
}

impl AgentDispatcher for InMemoryAgentDispatcher {
    fn dispatch(&self, trigger: AgentTrigger) -> Result<(), DispatchError> {
        info!(
            agent = trigger.agent.label(),
            lead = %trigger.lead_email,
            "queued downstream agent trigger"
        );
        let mut guard = self.triggers.lock().expect("dispatcher mutex poisoned");
        guard.push(trigger);
        Ok(())
    }
}

impl InMemoryAgentDispatcher {
    pub(crate) fn triggers(&self) -> Vec<AgentTrigger> {
        self.triggers
            .lock()
            .expect("dispatcher mutex poisoned")
            .clone()
    }
}

pub(crate) fn read_profile(path: &Path) -> Result<IcpProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
