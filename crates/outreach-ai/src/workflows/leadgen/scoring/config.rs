use serde::{Deserialize, Serialize};

/// Weights and segment thresholds applied by the ICP scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub industry_weight: u32,
    pub role_weight: u32,
    /// Awarded once per required technology found in the lead's stack.
    pub tech_weight: u32,
    pub hot_threshold: u32,
    /// Lower bound of WARM. Also the qualification bar for the outreach handoff.
    pub warm_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            industry_weight: 30,
            role_weight: 30,
            tech_weight: 20,
            hot_threshold: 80,
            warm_threshold: 50,
        }
    }
}
