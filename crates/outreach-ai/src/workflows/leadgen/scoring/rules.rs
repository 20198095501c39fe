use super::super::domain::{EnrichedLead, IcpProfile};
use super::config::ScoringConfig;

/// Criterion that contributed points to a lead's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatchCriterion {
    Industry(String),
    Role(String),
    Tech(String),
}

impl MatchCriterion {
    pub(crate) fn reason(&self) -> String {
        match self {
            MatchCriterion::Industry(industry) => format!("Industry match: {industry}"),
            MatchCriterion::Role(role) => format!("Role match: {role}"),
            MatchCriterion::Tech(tech) => format!("Tech match: {tech}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleHit {
    pub criterion: MatchCriterion,
    pub points: u32,
}

/// Evaluates every criterion in order: industry, role, then each required technology in
/// profile order. Every hit is independent and additive.
pub(crate) fn evaluate_rules(
    lead: &EnrichedLead,
    profile: &IcpProfile,
    config: &ScoringConfig,
) -> Vec<RuleHit> {
    let mut hits = Vec::new();

    if let Some(industry) = lead.industry.as_deref() {
        if contains(&profile.target_industries, industry) {
            hits.push(RuleHit {
                criterion: MatchCriterion::Industry(industry.to_string()),
                points: config.industry_weight,
            });
        }
    }

    if let Some(role) = lead.role.as_deref() {
        if contains(&profile.target_roles, role) {
            hits.push(RuleHit {
                criterion: MatchCriterion::Role(role.to_string()),
                points: config.role_weight,
            });
        }
    }

    for tech in &profile.required_tech {
        if contains(&lead.tech_stack, tech) {
            hits.push(RuleHit {
                criterion: MatchCriterion::Tech(tech.clone()),
                points: config.tech_weight,
            });
        }
    }

    hits
}

fn contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|value| value == needle)
}
