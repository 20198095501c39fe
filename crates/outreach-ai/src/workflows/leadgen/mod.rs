//! Lead-gen agent: ingestion, enrichment, ICP scoring, and the outreach handoff.

pub mod domain;
pub mod enrichment;
pub mod handoff;
pub mod ingest;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{EnrichedLead, IcpProfile, LeadSegment, LeadSource, RawLead, ScoredLead};
pub use enrichment::{LeadEnricher, MockEnricher};
pub use handoff::{HandoffError, OutreachHandoff};
pub use ingest::{LeadImportError, LeadIngestor};
pub use router::{leadgen_router, LeadGenState};
pub use scoring::{score, IcpScorer, ScoringConfig};
pub use service::{LeadBatch, LeadGenService};
