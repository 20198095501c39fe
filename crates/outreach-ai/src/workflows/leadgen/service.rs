use std::io::Read;
use std::sync::Arc;

use tracing::info;

use super::domain::{IcpProfile, RawLead, ScoredLead};
use super::enrichment::LeadEnricher;
use super::handoff::{HandoffError, OutreachHandoff};
use super::ingest::{LeadImportError, LeadIngestor};
use super::scoring::{IcpScorer, ScoringConfig};

/// Lead-gen agent: ingest, enrich, score, and hand qualified leads to outreach.
pub struct LeadGenService<E> {
    enricher: Arc<E>,
    scorer: IcpScorer,
}

/// Leads collected for one batch, in the order they were supplied.
#[derive(Debug, Default)]
pub struct LeadBatch {
    leads: Vec<RawLead>,
}

impl LeadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_csv<R: Read>(mut self, reader: R) -> Result<Self, LeadImportError> {
        self.leads.extend(LeadIngestor::from_reader(reader)?);
        Ok(self)
    }

    pub fn with_manual(mut self, entries: Vec<RawLead>) -> Self {
        self.leads.extend(LeadIngestor::manual(entries));
        self
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

impl<E> LeadGenService<E>
where
    E: LeadEnricher + 'static,
{
    pub fn new(enricher: Arc<E>, profile: IcpProfile) -> Self {
        Self::with_config(enricher, profile, ScoringConfig::default())
    }

    pub fn with_config(enricher: Arc<E>, profile: IcpProfile, config: ScoringConfig) -> Self {
        Self {
            enricher,
            scorer: IcpScorer::with_config(profile, config),
        }
    }

    pub fn scorer(&self) -> &IcpScorer {
        &self.scorer
    }

    /// Enrich and score every lead in the batch.
    pub fn process_batch(&self, batch: LeadBatch) -> Vec<ScoredLead> {
        let scored: Vec<ScoredLead> = batch
            .leads
            .into_iter()
            .map(|raw| {
                let enriched = self.enricher.enrich(raw);
                self.scorer.score(&enriched)
            })
            .collect();

        let qualified = scored
            .iter()
            .filter(|lead| self.scorer.qualifies(lead))
            .count();
        info!(total = scored.len(), qualified, "processed lead batch");

        scored
    }

    /// Handoff sink whose qualification bar matches this scorer's WARM threshold.
    pub fn handoff_to(&self, output_path: impl Into<std::path::PathBuf>) -> OutreachHandoff {
        OutreachHandoff::new(output_path, self.scorer.config().warm_threshold)
    }

    pub fn handoff(
        &self,
        leads: &[ScoredLead],
        output_path: impl Into<std::path::PathBuf>,
    ) -> Result<usize, HandoffError> {
        self.handoff_to(output_path).write(leads)
    }
}
