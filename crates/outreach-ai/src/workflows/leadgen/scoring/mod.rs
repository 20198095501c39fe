mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;

use super::domain::{EnrichedLead, IcpProfile, LeadSegment, ScoredLead};
use tracing::debug;

/// Stateless scorer applying one ICP profile to enriched leads.
#[derive(Debug, Clone)]
pub struct IcpScorer {
    profile: IcpProfile,
    config: ScoringConfig,
}

impl IcpScorer {
    pub fn new(profile: IcpProfile) -> Self {
        Self::with_config(profile, ScoringConfig::default())
    }

    pub fn with_config(profile: IcpProfile, config: ScoringConfig) -> Self {
        Self { profile, config }
    }

    pub fn profile(&self) -> &IcpProfile {
        &self.profile
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, lead: &EnrichedLead) -> ScoredLead {
        let hits = rules::evaluate_rules(lead, &self.profile, &self.config);
        let score = hits.iter().map(|hit| hit.points).sum();
        let segment = policy::segment_for(score, &self.config);
        let match_reasons = hits.iter().map(|hit| hit.criterion.reason()).collect();

        debug!(email = %lead.email, score, segment = segment.label(), "scored lead");

        ScoredLead {
            lead: lead.clone(),
            score,
            segment,
            match_reasons,
        }
    }

    /// Segment a bare score would land in under this scorer's thresholds.
    pub fn segment_for(&self, score: u32) -> LeadSegment {
        policy::segment_for(score, &self.config)
    }

    /// Whether a scored lead clears the WARM bar and should be handed to outreach.
    pub fn qualifies(&self, lead: &ScoredLead) -> bool {
        lead.score >= self.config.warm_threshold
    }
}

/// Scores a single lead against a profile with the default weights.
pub fn score(lead: &EnrichedLead, profile: &IcpProfile) -> ScoredLead {
    IcpScorer::new(profile.clone()).score(lead)
}
